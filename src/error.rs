//! Error types for the dukembb stats client

use thiserror::Error;


pub type Result<T> = std::result::Result<T, DukeError>;

#[derive(Error, Debug)]
pub enum DukeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to parse id: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    /// API key or base URL not configured; raised before any network call.
    #[error("API configuration missing")]
    Unavailable,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Invalid API key. Please check your configuration.")]
    InvalidApiKey,

    #[error("API request failed: {status} {reason}")]
    RequestFailed { status: u16, reason: String },

    /// The provider answered 200 but reported errors in the payload.
    #[error("{message}")]
    Api { message: String },

    #[error("No player data found")]
    NoPlayers,

    #[error("Log setup failed: {0}")]
    LogSetup(String),
}

impl DukeError {
    /// Map a non-success HTTP status to the matching error.
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        match status.as_u16() {
            429 => DukeError::RateLimited,
            401 => DukeError::InvalidApiKey,
            code => DukeError::RequestFailed {
                status: code,
                reason: status.canonical_reason().unwrap_or("").to_string(),
            },
        }
    }
}
