//! Errors returned by the Ghost client

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum GhostError {
    #[error("invalid ghost configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("unsupported ghost API version {0:?}")]
    UnsupportedVersion(String),

    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("ghost responded with {status}: {message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}
