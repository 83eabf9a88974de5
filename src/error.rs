//! Error types for Question Gen.
//!
//! The selection engine itself is total — every well-typed request produces
//! a result — so errors only exist at the configuration and bootstrap
//! boundary.

/// Top-level error type for the service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for the service.
pub type Result<T> = std::result::Result<T, Error>;
