use crate::config::{Credentials, NewGroup, SecretString};
use crate::data_model::api::{CreatedGroup, LoginResponse};
use crate::probe::{HttpResponse, TransportError};
use serde_json::json;
use thiserror::Error;
use url::Url;

/// Seam between the probe flows and the HTTP engine. The production
/// implementation is `probe_engine::CurlTransport`; tests substitute a
/// scripted transport.
pub trait Transport {
    fn execute(&mut self, request: &ApiRequest) -> Result<HttpResponse, TransportError>;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Method {
    Get,
    Post,
}

/// One fully described call against the backend. Requests are plain
/// data so they can be inspected by tests and executed by any
/// `Transport`.
#[derive(Clone, Debug)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub body: Option<String>,
    pub bearer: Option<SecretString>,
}

/// Opaque login credential. Authorized request constructors take this
/// by reference, so an authorization header cannot be built without a
/// successful `extract_token` first.
#[derive(Clone, Debug)]
pub struct AuthToken(SecretString);

impl AuthToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretString::new(value))
    }

    pub fn expose(&self) -> &str {
        self.0.expose()
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("response body was not valid JSON: {0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error("token field is missing or empty")]
    MissingToken,
}

/// Pulls the bearer token out of a successful login response.
pub fn extract_token(response: &HttpResponse) -> Result<AuthToken, TokenError> {
    let body: LoginResponse = serde_json::from_str(&response.body)?;
    match body.token {
        Some(token) if !token.is_empty() => Ok(AuthToken::new(token)),
        _ => Err(TokenError::MissingToken),
    }
}

/// Identifier of a just-created group, if the response carries one.
pub fn created_group_id(response: &HttpResponse) -> Option<i64> {
    serde_json::from_str::<CreatedGroup>(&response.body)
        .ok()
        .map(|group| group.id)
}

pub fn login_request(base: &Url, credentials: &Credentials) -> ApiRequest {
    ApiRequest {
        method: Method::Post,
        url: endpoint(base, "/auth/login"),
        body: Some(credential_body(credentials)),
        bearer: None,
    }
}

pub fn signup_request(base: &Url, credentials: &Credentials) -> ApiRequest {
    ApiRequest {
        method: Method::Post,
        url: endpoint(base, "/auth/signup"),
        body: Some(credential_body(credentials)),
        bearer: None,
    }
}

pub fn admin_messages_request(base: &Url, token: &AuthToken) -> ApiRequest {
    authorized_get(base, "/api/shadow/messages", token)
}

pub fn list_groups_request(base: &Url, token: &AuthToken) -> ApiRequest {
    authorized_get(base, "/api/groups", token)
}

pub fn create_group_request(base: &Url, token: &AuthToken, group: &NewGroup) -> ApiRequest {
    let body = json!({
        "name": group.name,
        "description": group.description,
        "isPrivate": group.is_private,
    });
    ApiRequest {
        method: Method::Post,
        url: endpoint(base, "/api/groups"),
        body: Some(body.to_string()),
        bearer: Some(token.0.clone()),
    }
}

pub fn group_messages_request(base: &Url, token: &AuthToken, group_id: i64) -> ApiRequest {
    authorized_get(base, &format!("/api/groups/{group_id}/messages"), token)
}

fn authorized_get(base: &Url, path: &str, token: &AuthToken) -> ApiRequest {
    ApiRequest {
        method: Method::Get,
        url: endpoint(base, path),
        body: None,
        bearer: Some(token.0.clone()),
    }
}

fn credential_body(credentials: &Credentials) -> String {
    json!({
        "email": credentials.email,
        "password": credentials.password.expose(),
    })
    .to_string()
}

fn endpoint(base: &Url, path: &str) -> Url {
    let mut url = base.clone();
    url.set_path(path);
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("http://localhost:8080").unwrap()
    }

    fn credentials() -> Credentials {
        Credentials {
            email: "debug1@test.com".to_string(),
            password: "password".into(),
        }
    }

    #[test]
    fn login_request_posts_credentials_without_auth() {
        let request = login_request(&base(), &credentials());
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url.path(), "/auth/login");
        assert!(request.bearer.is_none());

        let body: serde_json::Value =
            serde_json::from_str(request.body.as_deref().expect("body")).expect("json");
        assert_eq!(body["email"], "debug1@test.com");
        assert_eq!(body["password"], "password");
    }

    #[test]
    fn signup_request_targets_signup_path() {
        let request = signup_request(&base(), &credentials());
        assert_eq!(request.url.path(), "/auth/signup");
        assert_eq!(request.method, Method::Post);
    }

    #[test]
    fn authorized_requests_carry_the_bearer_token() {
        let token = AuthToken::new("abc");

        let admin = admin_messages_request(&base(), &token);
        assert_eq!(admin.method, Method::Get);
        assert_eq!(admin.url.path(), "/api/shadow/messages");
        assert_eq!(admin.bearer.as_ref().map(SecretString::expose), Some("abc"));

        let groups = list_groups_request(&base(), &token);
        assert_eq!(groups.url.path(), "/api/groups");

        let messages = group_messages_request(&base(), &token, 42);
        assert_eq!(messages.url.path(), "/api/groups/42/messages");
    }

    #[test]
    fn create_group_request_serializes_the_new_group() {
        let token = AuthToken::new("abc");
        let request = create_group_request(&base(), &token, &NewGroup::default());
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url.path(), "/api/groups");

        let body: serde_json::Value =
            serde_json::from_str(request.body.as_deref().expect("body")).expect("json");
        assert_eq!(body["name"], "Debug Group");
        assert_eq!(body["description"], "Test");
        assert_eq!(body["isPrivate"], false);
    }

    #[test]
    fn extract_token_returns_the_token() {
        let response = HttpResponse {
            status: 200,
            body: r#"{"token":"abc"}"#.to_string(),
        };
        let token = extract_token(&response).expect("token");
        assert_eq!(token.expose(), "abc");
    }

    #[test]
    fn extract_token_rejects_missing_or_empty_tokens() {
        let absent = HttpResponse {
            status: 200,
            body: "{}".to_string(),
        };
        let empty = HttpResponse {
            status: 200,
            body: r#"{"token":""}"#.to_string(),
        };
        assert!(matches!(extract_token(&absent), Err(TokenError::MissingToken)));
        assert!(matches!(extract_token(&empty), Err(TokenError::MissingToken)));
    }

    #[test]
    fn extract_token_rejects_non_json_bodies() {
        let response = HttpResponse {
            status: 200,
            body: "<html>oops</html>".to_string(),
        };
        assert!(matches!(
            extract_token(&response),
            Err(TokenError::MalformedBody(_))
        ));
    }

    #[test]
    fn created_group_id_reads_the_id_when_present() {
        let created = HttpResponse {
            status: 200,
            body: r#"{"id":42,"name":"Debug Group"}"#.to_string(),
        };
        let unusable = HttpResponse {
            status: 200,
            body: r#"{"name":"Debug Group"}"#.to_string(),
        };
        assert_eq!(created_group_id(&created), Some(42));
        assert_eq!(created_group_id(&unusable), None);
    }

    #[test]
    fn endpoint_replaces_the_base_path() {
        let url = endpoint(&base(), "/auth/login");
        assert_eq!(url.as_str(), "http://localhost:8080/auth/login");
    }
}
