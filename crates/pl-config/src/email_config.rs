use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_EMAIL_TIMEOUT_SECS: u64 = 1;
pub const MAX_EMAIL_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_EMAIL_TIMEOUT_SECS: u64 = 10;

/// Outbound mail-relay settings.
///
/// Whether an individual notification is emailed is governed by the
/// admin-managed `NotificationSettings` record, not by this file; this
/// section only locates the transport.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    /// Relay endpoint URL; None disables the transport entirely
    pub endpoint: Option<String>,
    /// Bearer key for the relay (prefer the PL_EMAIL_API_KEY env var)
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            timeout_secs: DEFAULT_EMAIL_TIMEOUT_SECS,
        }
    }
}

impl EmailConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(endpoint) = &self.endpoint {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(ConfigError::email(format!(
                    "email.endpoint must be an http(s) URL, got {endpoint}"
                )));
            }
        }

        if self.timeout_secs < MIN_EMAIL_TIMEOUT_SECS
            || self.timeout_secs > MAX_EMAIL_TIMEOUT_SECS
        {
            return Err(ConfigError::email(format!(
                "email.timeout_secs must be {}-{}, got {}",
                MIN_EMAIL_TIMEOUT_SECS, MAX_EMAIL_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }
}
