use std::env;
use std::time::Duration;

use url::Url;

pub const DEFAULT_PRACTICUM_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub practicum_endpoint: Url,
    pub telegram_api_url: Url,
    /// Sleep between two poll cycles
    pub retry_period: Duration,
    /// Timeout applied to every outbound HTTP request
    pub http_timeout: Duration,
}

/// Tokens required to run the bot. All three must be present and non-empty.
#[derive(Clone)]
pub struct Credentials {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
}

// Tokens stay out of logs and panic messages.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("practicum_token", &"***")
            .field("telegram_token", &"***")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            credentials: Credentials::from_env()?,
            practicum_endpoint: url_from_env("PRACTICUM_ENDPOINT", DEFAULT_PRACTICUM_ENDPOINT)?,
            telegram_api_url: url_from_env("TELEGRAM_API_URL", DEFAULT_TELEGRAM_API_URL)?,
            retry_period: Duration::from_secs(secs_from_env(
                "RETRY_PERIOD_SECS",
                DEFAULT_RETRY_PERIOD_SECS,
            )),
            http_timeout: Duration::from_secs(secs_from_env(
                "HTTP_TIMEOUT_SECS",
                DEFAULT_HTTP_TIMEOUT_SECS,
            )),
        })
    }
}

impl Credentials {
    /// Reads the three tokens, reporting every one that is unset or empty
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut missing = Vec::new();
        let mut read = |name: &'static str| match env::var(name) {
            Ok(value) if !value.trim().is_empty() => value,
            _ => {
                missing.push(name);
                String::new()
            }
        };

        let practicum_token = read("PRACTICUM_TOKEN");
        let telegram_token = read("TELEGRAM_TOKEN");
        let telegram_chat_id = read("TELEGRAM_CHAT_ID");

        if !missing.is_empty() {
            return Err(ConfigError::MissingTokens(missing));
        }

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
        })
    }
}

fn url_from_env(name: &'static str, default: &str) -> Result<Url, ConfigError> {
    let raw = env::var(name).unwrap_or_else(|_| default.to_string());
    let url = Url::parse(&raw).map_err(|_| ConfigError::InvalidUrl(name))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(name));
    }

    Ok(url)
}

/// Zero and unparsable values fall back to the default
fn secs_from_env(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(default)
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    MissingTokens(Vec<&'static str>),
    InvalidUrl(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingTokens(names) => write!(
                f,
                "missing required environment variables: {}",
                names.join(", ")
            ),
            ConfigError::InvalidUrl(name) => {
                write!(f, "{} must be a valid http(s) URL", name)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
