//! Error types for Drift

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DriftError>;

#[derive(Error, Debug)]
pub enum DriftError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("{0}")]
    Api(#[from] ApiError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Failed to access session cache: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse session cache: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors produced by the identity service and document store clients.
///
/// Two kinds of failure are user-visible: authentication failures render as a
/// short inline phrase on the login screen, everything else renders as a
/// fetch error with a retry hint. The `Display` output is the user-facing
/// message.
#[derive(Error, Debug, Clone)]
pub enum ApiError {
    /// Sign-in rejected by the identity service. The payload is already a
    /// short human-readable phrase, so `Display` adds no prefix.
    #[error("{0}")]
    Auth(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("Malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// True for failures that should send the user back through sign-in.
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth(_) | ApiError::Status { status: 401, .. })
    }
}
