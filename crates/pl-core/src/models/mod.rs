pub mod archive_bundle;
pub mod error_details;
pub mod log_entry;
pub mod log_level;
pub mod metric_kind;
pub mod metric_thresholds;
pub mod notification;
pub mod notification_kind;
pub mod notification_priority;
pub mod notification_settings;
pub mod performance_metric;
pub mod retention_policy;
