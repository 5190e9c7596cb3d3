use pl_guard::RequestGuard;
use pl_telemetry::{EventLogger, NotificationDispatcher, PerformanceMonitor, RetentionManager};

use std::sync::Arc;

/// Shared application state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub logger: Arc<EventLogger>,
    pub dispatcher: Arc<NotificationDispatcher>,
    pub monitor: PerformanceMonitor,
    pub retention: Arc<RetentionManager>,
    pub guard: Arc<RequestGuard>,
}
