use pl_core::PerformanceMetric;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

/// Wire form of a recorded metric; unset fields are omitted
#[derive(Debug, Serialize)]
pub struct MetricDto {
    pub id: Uuid,
    pub kind: String,
    pub name: String,
    pub duration_ms: f64,
    pub timestamp: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl From<PerformanceMetric> for MetricDto {
    fn from(metric: PerformanceMetric) -> Self {
        Self {
            id: metric.id,
            kind: metric.kind.as_str().to_string(),
            name: metric.name,
            duration_ms: metric.duration_ms,
            timestamp: metric.timestamp,
            user_id: metric.user_id,
            path: metric.path,
            status: metric.status,
            success: metric.success,
            size: metric.size,
            metadata: metric.metadata,
        }
    }
}
