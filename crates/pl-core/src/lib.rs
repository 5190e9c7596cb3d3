pub mod error;
pub mod models;
pub mod significance;
pub mod store;

pub use error::{CoreError, Result};
pub use models::archive_bundle::ArchiveBundle;
pub use models::error_details::ErrorDetails;
pub use models::log_entry::{LogContext, LogEntry};
pub use models::log_level::LogLevel;
pub use models::metric_kind::MetricKind;
pub use models::metric_thresholds::{MetricThresholds, MetricThresholdsUpdate, ThresholdBounds};
pub use models::notification::Notification;
pub use models::notification_kind::NotificationKind;
pub use models::notification_priority::NotificationPriority;
pub use models::notification_settings::{
    EmailSettings, EmailSettingsUpdate, NotificationSettings, NotificationSettingsUpdate,
};
pub use models::performance_metric::PerformanceMetric;
pub use models::retention_policy::{Retention, RetentionPolicy, RetentionPolicyUpdate};
pub use significance::SignificanceRules;
pub use store::{
    ArchiveStore, LogStore, MetricQuery, MetricStore, NotificationStore, SettingKind,
    SettingsStore,
};

#[cfg(test)]
mod tests;
