//! Metric read handlers

use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::metrics::list_metrics_query::ListMetricsQuery;
use crate::api::metrics::metric_dto::MetricDto;
use crate::api::metrics::metric_list_response::MetricListResponse;
use crate::api::metrics::summary_query::SummaryQuery;
use crate::api::metrics::summary_response::SummaryResponse;
use crate::state::AppState;

use pl_core::{MetricKind, MetricQuery};

use std::str::FromStr;

use axum::{
    Json,
    extract::{Query, State},
};

const DEFAULT_METRIC_LIMIT: u32 = 100;
const MAX_METRIC_LIMIT: u32 = 1000;
const DEFAULT_SUMMARY_DAYS: u32 = 7;
const MAX_SUMMARY_DAYS: u32 = 90;

/// GET /api/v1/metrics
///
/// Filtered, time-ranged metric listing, most recent first
pub async fn list_metrics(
    State(state): State<AppState>,
    Query(query): Query<ListMetricsQuery>,
) -> ApiResult<Json<MetricListResponse>> {
    let kind = match query.kind.as_deref() {
        Some(raw) => Some(
            MetricKind::from_str(raw)
                .map_err(|_| ApiError::validation(format!("Unknown metric kind: {raw}")))?,
        ),
        None => None,
    };

    let metrics = state
        .monitor
        .metrics(MetricQuery {
            kind,
            start: query.start,
            end: query.end,
            limit: query.limit.unwrap_or(DEFAULT_METRIC_LIMIT).min(MAX_METRIC_LIMIT),
        })
        .await?;

    Ok(Json(MetricListResponse {
        metrics: metrics.into_iter().map(MetricDto::from).collect(),
    }))
}

/// GET /api/v1/metrics/summary
///
/// Per-(kind, name) aggregates over a trailing window
pub async fn metrics_summary(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> ApiResult<Json<SummaryResponse>> {
    let days = query.days.unwrap_or(DEFAULT_SUMMARY_DAYS).min(MAX_SUMMARY_DAYS);

    let summary = state.monitor.performance_summary(days).await?;

    Ok(Json(SummaryResponse { summary }))
}
