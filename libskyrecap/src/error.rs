//! Error types for sky-recap

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RecapError>;

#[derive(Error, Debug)]
pub enum RecapError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("API error: {status} {reason}")]
    Api { status: u16, reason: String },

    #[error("Unknown error: {0}")]
    Unknown(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl RecapError {
    /// Returns the appropriate exit code for this error
    ///
    /// Every failure aborts the run with status 1; there is no partial success.
    pub fn exit_code(&self) -> i32 {
        match self {
            RecapError::Usage(_) => 1,
            RecapError::Api { .. } => 1,
            RecapError::Unknown(_) => 1,
            RecapError::Config(_) => 1,
        }
    }

    /// Build an API error from a non-success HTTP status
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        RecapError::Api {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown Status").to_string(),
        }
    }
}

impl From<reqwest::Error> for RecapError {
    fn from(error: reqwest::Error) -> Self {
        match error.status() {
            Some(status) if !status.is_success() => RecapError::from_status(status),
            _ => RecapError::Unknown(error.to_string()),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}
