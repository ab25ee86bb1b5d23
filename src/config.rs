//! Configuration types.

use std::time::Duration;

use crate::error::ConfigError;

/// Client configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the conversational backend (no trailing slash).
    pub api_base: String,
    /// Optional per-request timeout. When unset, an unanswered request
    /// waits indefinitely and the typing indicator stays up.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: "http://127.0.0.1:8000".to_string(),
            request_timeout: None,
        }
    }
}

impl ClientConfig {
    /// Build a config from `FINNY_API_BASE` and `FINNY_TIMEOUT_SECS`,
    /// falling back to defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Ok(base) = std::env::var("FINNY_API_BASE") {
            config.api_base = normalize_base(&base);
        }
        if let Ok(raw) = std::env::var("FINNY_TIMEOUT_SECS") {
            config.request_timeout = Some(parse_timeout_secs(&raw)?);
        }
        Ok(config)
    }
}

/// Strip trailing slashes so endpoint paths can be appended verbatim.
fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

fn parse_timeout_secs(raw: &str) -> Result<Duration, ConfigError> {
    let secs: u64 = raw.trim().parse().map_err(|e| ConfigError::InvalidValue {
        key: "FINNY_TIMEOUT_SECS".to_string(),
        message: format!("{e}"),
    })?;
    Ok(Duration::from_secs(secs))
}
