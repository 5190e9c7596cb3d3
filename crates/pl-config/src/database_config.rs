use crate::DEFAULT_DATABASE_FILENAME;

use serde::Deserialize;

/// SQLite storage settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Path relative to the config directory
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_DATABASE_FILENAME.to_string(),
        }
    }
}
