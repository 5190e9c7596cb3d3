use pl_core::{
    LogEntry, LogLevel, MetricKind, Notification, NotificationKind, NotificationPriority,
    PerformanceMetric,
};

use chrono::{Duration, Utc};

/// A log entry timestamped `secs_ago` seconds in the past
pub fn log_entry_at(level: LogLevel, message: &str, secs_ago: i64) -> LogEntry {
    let mut entry = LogEntry::new(level, message);
    entry.timestamp = Utc::now() - Duration::seconds(secs_ago);
    entry
}

/// A log entry timestamped `days_ago` days in the past
pub fn log_entry_days_ago(level: LogLevel, message: &str, days_ago: i64) -> LogEntry {
    let mut entry = LogEntry::new(level, message);
    entry.timestamp = Utc::now() - Duration::days(days_ago);
    entry
}

/// A notification timestamped `secs_ago` seconds in the past
pub fn notification_at(
    priority: NotificationPriority,
    title: &str,
    secs_ago: i64,
) -> Notification {
    let mut notification = Notification::new(
        NotificationKind::SystemEvent,
        title,
        "test notification body",
        priority,
    );
    notification.timestamp = Utc::now() - Duration::seconds(secs_ago);
    notification
}

/// A metric timestamped `secs_ago` seconds in the past
pub fn metric_at(
    kind: MetricKind,
    name: &str,
    duration_ms: f64,
    secs_ago: i64,
) -> PerformanceMetric {
    let mut metric = PerformanceMetric::new(kind, name, duration_ms);
    metric.timestamp = Utc::now() - Duration::seconds(secs_ago);
    metric
}
