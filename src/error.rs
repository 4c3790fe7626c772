/// Errors raised inside a single poll cycle
#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error("API request error: endpoint returned {status} {reason}")]
    ApiStatus { status: u16, reason: String },

    #[error("API request error: {0}")]
    ApiRequest(#[from] reqwest::Error),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Unknown homework status: {0}")]
    UnknownStatus(String),

    #[error("Notification error: {0}")]
    Notification(String),
}

/// Result type alias for cycle steps
pub type BotResult<T> = Result<T, BotError>;
