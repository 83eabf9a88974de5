//! Configuration types.

use crate::error::ConfigError;

/// Service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// TCP port the HTTP server listens on.
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self { port: 8001 }
    }
}

impl ServiceConfig {
    /// Read configuration from the environment.
    ///
    /// `PORT` overrides the listen port. An unset variable falls back to the
    /// default; a set-but-unparsable one is an error rather than a silent
    /// fallback.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var("PORT") {
            config.port = raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT".to_string(),
                message: format!("expected a port number, got {raw:?}"),
            })?;
        }
        Ok(config)
    }
}
