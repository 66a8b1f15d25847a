use crate::config::{Credentials, ProbeConfig};
use clap::{Parser, Subcommand};
use std::time::Duration;
use thiserror::Error;

pub use crate::common::net::parse_base_url;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT: &str = "10s";

const DEFAULT_ADMIN_EMAIL: &str = "admin@shadow.com";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

const DEFAULT_GROUP_EMAIL: &str = "debug1@test.com";
const DEFAULT_GROUP_PASSWORD: &str = "password";
const GROUP_EMAIL_PREFIX: &str = "debug_user_";

#[derive(Parser, Debug)]
#[command(name = "chatprobe")]
#[command(about = "Sequential probe for chat-backend HTTP APIs", long_about = None)]
pub struct CliArgs {
    /// Backend base URL (bare host[:port] gets an http:// scheme)
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,

    /// Total per-request timeout (e.g. 10s, 1500ms)
    #[arg(long, value_name = "DURATION", default_value = DEFAULT_TIMEOUT, global = true)]
    timeout: String,

    #[command(subcommand)]
    command: ProbeCommand,
}

#[derive(Subcommand, Debug)]
pub enum ProbeCommand {
    /// Log in with administrator credentials and preview the shadow message feed
    Admin {
        /// Administrator account email
        #[arg(long, default_value = DEFAULT_ADMIN_EMAIL)]
        email: String,

        /// Administrator account password
        #[arg(long, default_value = DEFAULT_ADMIN_PASSWORD)]
        password: String,
    },
    /// Sign up a throwaway account, then walk group listing, creation, and messages
    Groups {
        /// Suffix for the synthesized signup email (debug_user_SUFFIX)
        #[arg(value_name = "SUFFIX")]
        suffix: Option<String>,

        /// Password for the throwaway account
        #[arg(long, default_value = DEFAULT_GROUP_PASSWORD)]
        password: String,
    },
}

#[derive(Debug)]
pub struct AppSettings {
    pub config: ProbeConfig,
    pub probe: ProbeKind,
}

#[derive(Debug)]
pub enum ProbeKind {
    Admin { credentials: Credentials },
    Groups { credentials: Credentials },
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid base url: {value}")]
    InvalidBaseUrl { value: String },
    #[error("invalid timeout: {value}")]
    InvalidTimeout { value: String },
}

pub fn load_from_cli() -> Result<AppSettings, SettingsError> {
    from_args(CliArgs::parse())
}

pub fn from_args(args: CliArgs) -> Result<AppSettings, SettingsError> {
    let base_url = parse_base_url(&args.base_url).ok_or_else(|| SettingsError::InvalidBaseUrl {
        value: args.base_url.clone(),
    })?;
    let timeout_total =
        parse_duration(&args.timeout).ok_or_else(|| SettingsError::InvalidTimeout {
            value: args.timeout.clone(),
        })?;

    let probe = match args.command {
        ProbeCommand::Admin { email, password } => ProbeKind::Admin {
            credentials: Credentials {
                email,
                password: password.into(),
            },
        },
        ProbeCommand::Groups { suffix, password } => {
            let email = match suffix {
                Some(suffix) => format!("{GROUP_EMAIL_PREFIX}{suffix}"),
                None => DEFAULT_GROUP_EMAIL.to_string(),
            };
            ProbeKind::Groups {
                credentials: Credentials {
                    email,
                    password: password.into(),
                },
            }
        }
    };

    Ok(AppSettings {
        config: ProbeConfig {
            base_url,
            timeout_total,
        },
        probe,
    })
}

fn parse_duration(input: &str) -> Option<Duration> {
    if let Some(value) = input.strip_suffix("ms") {
        value.parse::<u64>().ok().map(Duration::from_millis)
    } else if let Some(value) = input.strip_suffix('s') {
        value.parse::<u64>().ok().map(Duration::from_secs)
    } else {
        input.parse::<u64>().ok().map(Duration::from_secs)
    }
}
