mod config;
mod credentials;
mod error;
mod log_level;
mod logging_config;
mod trello_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use credentials::Credentials;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use trello_config::{MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS, TrelloConfig};

const DEFAULT_API_KEY: &str = "your_api_key";
const DEFAULT_TOKEN: &str = "your_auth_token";
const DEFAULT_BASE_URL: &str = "https://api.trello.com/1";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = false;
const CONFIG_DIR_ENV: &str = "TRELLO_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".trello";
const CONFIG_FILE_NAME: &str = "config.toml";
