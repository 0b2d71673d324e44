use crate::{
    CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, Credentials,
    DEFAULT_CONFIG_DIR, LoggingConfig, TrelloConfig,
};

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub trello: TrelloConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config from defaults, file and environment.
    ///
    /// Loading order:
    /// 1. Check for TRELLO_CONFIG_DIR env var, else use ./.trello/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply TRELLO_* environment variable overrides
    ///
    /// The config directory is never created. Does NOT validate - call
    /// validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: TRELLO_CONFIG_DIR env var > ./.trello/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.trello.validate()?;

        if let Some(ref file) = self.logging.file
            && file.trim().is_empty()
        {
            return Err(ConfigError::config("logging.file cannot be empty"));
        }

        Ok(())
    }

    /// Apply the `--api_key` / `--auth_token` pair from the command line.
    ///
    /// Both halves must be present; a lone flag is ignored with a warning.
    /// Returns true if the credentials were replaced.
    pub fn apply_credential_flags(
        &mut self,
        api_key: Option<&str>,
        auth_token: Option<&str>,
    ) -> bool {
        match (api_key, auth_token) {
            (Some(key), Some(token)) => {
                self.trello.api_key = key.to_string();
                self.trello.token = token.to_string();
                true
            }
            (Some(_), None) => {
                warn!("--api_key given without --auth_token; ignoring it");
                false
            }
            (None, Some(_)) => {
                warn!("--auth_token given without --api_key; ignoring it");
                false
            }
            (None, None) => false,
        }
    }

    pub fn credentials(&self) -> Credentials {
        self.trello.credentials()
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  trello: {} (timeout {}s)",
            self.trello.base_url, self.trello.timeout_secs
        );

        let credentials = self.credentials();
        if credentials.is_placeholder() {
            warn!(
                "  credentials: placeholder values in use; \
                 set --api_key/--auth_token or TRELLO_API_KEY/TRELLO_TOKEN"
            );
        } else {
            info!("  credentials: set (api_key {})", credentials.masked_key());
        }

        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Trello
        Self::apply_env_string("TRELLO_API_KEY", &mut self.trello.api_key);
        Self::apply_env_string("TRELLO_TOKEN", &mut self.trello.token);
        Self::apply_env_string("TRELLO_BASE_URL", &mut self.trello.base_url);
        Self::apply_env_parse("TRELLO_TIMEOUT_SECS", &mut self.trello.timeout_secs);

        // Logging
        Self::apply_env_parse("TRELLO_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("TRELLO_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("TRELLO_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
