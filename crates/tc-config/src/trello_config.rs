use crate::{
    ConfigError, ConfigErrorResult, Credentials, DEFAULT_API_KEY, DEFAULT_BASE_URL,
    DEFAULT_TIMEOUT_SECS, DEFAULT_TOKEN,
};

use std::time::Duration;

use serde::Deserialize;

// Request timeout constraints
pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// Trello REST API settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TrelloConfig {
    pub api_key: String,
    pub token: String,
    /// API root, e.g. "https://api.trello.com/1"
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for TrelloConfig {
    fn default() -> Self {
        Self {
            api_key: String::from(DEFAULT_API_KEY),
            token: String::from(DEFAULT_TOKEN),
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl TrelloConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.timeout_secs < MIN_TIMEOUT_SECS || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::trello(format!(
                "trello.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        if !self.base_url.starts_with("http") {
            return Err(ConfigError::trello(format!(
                "trello.base_url must start with http, got '{}'",
                self.base_url
            )));
        }

        if self.api_key.trim().is_empty() {
            return Err(ConfigError::credentials("trello.api_key cannot be empty"));
        }

        if self.token.trim().is_empty() {
            return Err(ConfigError::credentials("trello.token cannot be empty"));
        }

        Ok(())
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.api_key.clone(), self.token.clone())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
