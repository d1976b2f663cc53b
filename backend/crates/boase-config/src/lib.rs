mod config;
mod error;
mod log_level;
mod logging_config;
mod supabase_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use supabase_config::SupabaseConfig;

pub const CONFIG_DIR_ENV: &str = "BOASE_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR: &str = ".boase";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_SUPABASE_URL: &str = "http://127.0.0.1:54321";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_EVENT_BUFFER_SIZE: usize = 16;
pub const MIN_EVENT_BUFFER_SIZE: usize = 1;
pub const MAX_EVENT_BUFFER_SIZE: usize = 1024;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
