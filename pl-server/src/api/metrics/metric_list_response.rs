use crate::api::metrics::metric_dto::MetricDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MetricListResponse {
    pub metrics: Vec<MetricDto>,
}
