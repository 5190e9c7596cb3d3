use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListMetricsQuery {
    /// Filter to one metric kind (e.g. api_response_time)
    pub kind: Option<String>,
    /// Inclusive RFC 3339 range start
    pub start: Option<DateTime<Utc>>,
    /// Inclusive RFC 3339 range end
    pub end: Option<DateTime<Utc>>,
    /// Maximum metrics returned (default 100, capped at 1000)
    pub limit: Option<u32>,
}
