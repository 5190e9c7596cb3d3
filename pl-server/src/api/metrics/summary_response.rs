use pl_telemetry::MetricSummary;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: Vec<MetricSummary>,
}
