use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_SWEEP_INTERVAL_SECS: u64 = 60;
pub const MAX_SWEEP_INTERVAL_SECS: u64 = 86_400;
pub const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 3600;

/// Scheduled retention sweep settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    pub enabled: bool,
    pub interval_secs: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_secs: DEFAULT_SWEEP_INTERVAL_SECS,
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.interval_secs < MIN_SWEEP_INTERVAL_SECS
            || self.interval_secs > MAX_SWEEP_INTERVAL_SECS
        {
            return Err(ConfigError::config(format!(
                "sweep.interval_secs must be {}-{}, got {}",
                MIN_SWEEP_INTERVAL_SECS, MAX_SWEEP_INTERVAL_SECS, self.interval_secs
            )));
        }
        Ok(())
    }
}
