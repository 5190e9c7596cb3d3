use crate::{
    ConfigError, ConfigErrorResult, DatabaseConfig, EmailConfig, LoggingConfig, RateLimitConfig,
    ServerConfig, SweepConfig,
};

use std::path::PathBuf;
use std::str::FromStr;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub rate_limit: RateLimitConfig,
    pub email: EmailConfig,
    pub sweep: SweepConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for PL_CONFIG_DIR env var, else use ./.pl/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply PL_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: PL_CONFIG_DIR env var > ./.pl/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("PL_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".pl"))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("PL_SERVER_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("PL_SERVER_PORT") {
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Ok(path) = std::env::var("PL_DATABASE_PATH") {
            self.database.path = path;
        }
        if let Ok(level) = std::env::var("PL_LOG_LEVEL") {
            // FromStr never fails, falls back to Info
            self.logging.level = crate::LogLevel::from_str(&level).unwrap();
        }
        if let Ok(max) = std::env::var("PL_RATE_LIMIT_MAX_REQUESTS") {
            if let Ok(max) = max.parse() {
                self.rate_limit.max_requests = max;
            }
        }
        if let Ok(window) = std::env::var("PL_RATE_LIMIT_WINDOW_SECS") {
            if let Ok(window) = window.parse() {
                self.rate_limit.window_secs = window;
            }
        }
        if let Ok(endpoint) = std::env::var("PL_EMAIL_ENDPOINT") {
            self.email.endpoint = Some(endpoint);
        }
        if let Ok(key) = std::env::var("PL_EMAIL_API_KEY") {
            self.email.api_key = Some(key);
        }
        if let Ok(interval) = std::env::var("PL_SWEEP_INTERVAL_SECS") {
            if let Ok(interval) = interval.parse() {
                self.sweep.interval_secs = interval;
            }
        }
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.rate_limit.validate()?;
        self.email.validate()?;
        self.sweep.validate()?;

        // Validate database path doesn't escape config dir
        let db_path = std::path::Path::new(&self.database.path);
        if db_path.is_absolute() || self.database.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);
        info!(
            "  rate limit: {} requests / {}s",
            self.rate_limit.max_requests, self.rate_limit.window_secs
        );
        match &self.email.endpoint {
            Some(endpoint) => info!("  email relay: {}", endpoint),
            None => info!("  email relay: disabled"),
        }
        info!(
            "  retention sweep: {} (every {}s)",
            if self.sweep.enabled { "on" } else { "off" },
            self.sweep.interval_secs
        );
    }
}
