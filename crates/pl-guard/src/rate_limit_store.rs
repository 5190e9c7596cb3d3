use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

/// Counter backend for the rate limiter.
///
/// The interface is async so a shared backend (atomic counters in a
/// distributed cache) can replace the in-process map without touching
/// call sites.
#[async_trait]
pub trait RateLimitStore: Send + Sync {
    /// Record one hit for `key`, returning the hit count within the
    /// active window. A window older than `window` is discarded and the
    /// count restarts at one.
    async fn increment(&self, key: &str, window: Duration) -> u32;
}

struct Window {
    count: u32,
    started_at: Instant,
}

/// Process-local counter map.
///
/// Known limitation: the state is not shared across server instances,
/// and same-instant hits from one client race on the counter. Swap in a
/// shared `RateLimitStore` backend when either matters.
#[derive(Default)]
pub struct InMemoryRateLimitStore {
    windows: Mutex<HashMap<String, Window>>,
}

#[async_trait]
impl RateLimitStore for InMemoryRateLimitStore {
    async fn increment(&self, key: &str, window: Duration) -> u32 {
        let mut windows = self.windows.lock().unwrap();
        let now = Instant::now();

        match windows.get_mut(key) {
            Some(existing) if now.duration_since(existing.started_at) <= window => {
                existing.count += 1;
                existing.count
            }
            _ => {
                windows.insert(
                    key.to_string(),
                    Window {
                        count: 1,
                        started_at: now,
                    },
                );
                1
            }
        }
    }
}
