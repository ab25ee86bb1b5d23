//! Error types for finny-chat.

/// Top-level error type for the client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Transport-related errors.
///
/// A request fails on a network error or an unparsable response body. HTTP
/// status codes are not interpreted; a backend error page simply fails to
/// parse.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Request to {path} failed: {reason}")]
    RequestFailed { path: String, reason: String },

    #[error("Invalid response body from {path}: {reason}")]
    InvalidBody { path: String, reason: String },
}

/// Result type alias for the client.
pub type Result<T> = std::result::Result<T, Error>;
