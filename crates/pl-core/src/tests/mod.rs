mod log_entry;
mod metric_thresholds;
mod notification_settings;
mod retention_policy;
