use pl_core::{MetricThresholds, NotificationSettings, RetentionPolicy};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RetentionSettingsResponse {
    pub retention: RetentionPolicy,
}

#[derive(Debug, Serialize)]
pub struct NotificationSettingsResponse {
    pub settings: NotificationSettings,
}

#[derive(Debug, Serialize)]
pub struct ThresholdsResponse {
    pub thresholds: MetricThresholds,
}
