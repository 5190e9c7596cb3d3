mod config;
mod database_config;
mod email_config;
mod error;
mod log_level;
mod logging_config;
mod rate_limit_config;
mod server_config;
mod sweep_config;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use email_config::EmailConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use rate_limit_config::RateLimitConfig;
pub use server_config::ServerConfig;
pub use sweep_config::SweepConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DATABASE_FILENAME: &str = "telemetry.db";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
