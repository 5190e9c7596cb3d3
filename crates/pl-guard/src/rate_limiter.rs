use crate::rate_limit_config::RateLimitConfig;
use crate::rate_limit_store::RateLimitStore;
use crate::{GuardError, Result as GuardErrorResult};

use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use error_location::ErrorLocation;

/// Per-client fixed-window rate limiter
pub struct RateLimiter {
    store: Arc<dyn RateLimitStore>,
    config: RateLimitConfig,
}

impl RateLimiter {
    pub fn new(store: Arc<dyn RateLimitStore>, config: RateLimitConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    /// Record a hit for `key` and check it against the cap
    pub async fn check(&self, key: &str) -> GuardErrorResult<()> {
        let window = Duration::from_secs(self.config.window_secs);
        let count = self.store.increment(key, window).await;

        if count > self.config.max_requests {
            return Err(GuardError::RateLimitExceeded {
                limit: self.config.max_requests,
                window_secs: self.config.window_secs,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
