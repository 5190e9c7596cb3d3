use crate::log_level::LogLevel;
use crate::{DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_LEVEL};

use serde::Deserialize;

/// Process log settings (fern); distinct from the persisted
/// `system_logs` collection.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Log file name; None logs to stdout
    pub file: Option<String>,
    /// Directory (under the config dir) holding log files
    pub dir: String,
    /// Colored output when logging to a TTY
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            file: None,
            dir: DEFAULT_LOG_DIRECTORY.to_string(),
            colored: true,
        }
    }
}
