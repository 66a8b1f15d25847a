use std::fmt;
use std::time::Duration;
use url::Url;

/// Validated probe-wide configuration shared by both flows.
#[derive(Clone, Debug)]
pub struct ProbeConfig {
    pub base_url: Url,
    pub timeout_total: Duration,
}

/// Email/password pair used for signup and login.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

/// Payload for the create-group call issued when the authenticated
/// user owns no groups yet.
#[derive(Clone, Debug)]
pub struct NewGroup {
    pub name: String,
    pub description: String,
    pub is_private: bool,
}

impl Default for NewGroup {
    fn default() -> Self {
        Self {
            name: "Debug Group".to_string(),
            description: "Test".to_string(),
            is_private: false,
        }
    }
}

/// String wrapper that redacts its value in Debug and Display output.
/// Used for passwords and the bearer token so step reports and error
/// messages never leak credentials.
#[derive(Clone, Eq, PartialEq)]
pub struct SecretString(String);

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretString([REDACTED])")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<String> for SecretString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SecretString {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
