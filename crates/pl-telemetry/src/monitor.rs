use crate::Result as TelemetryResult;
use crate::dispatcher::{Channel, NotificationDispatcher};
use crate::emitter::Emitter;
use crate::logger::EventLogger;

use pl_core::store::{MetricStore, SettingKind, SettingsStore};
use pl_core::{
    LogContext, MetricKind, MetricQuery, MetricThresholds, MetricThresholdsUpdate, Notification,
    NotificationKind, NotificationPriority, PerformanceMetric,
};

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use chrono::{Duration, Utc};
use serde::Serialize;
use serde_json::{Map, Value, json};
use tokio::sync::RwLock;

/// Upper bound on metrics scanned when building a summary
const SUMMARY_SCAN_LIMIT: u32 = 10_000;

/// Aggregated view of one (kind, name) metric group
#[derive(Debug, Clone, Serialize)]
pub struct MetricSummary {
    pub kind: MetricKind,
    pub name: String,
    pub count: u64,
    pub min_ms: f64,
    pub max_ms: f64,
    pub average_ms: f64,
    pub success_count: u64,
    pub failure_count: u64,
}

struct MonitorInner {
    metrics: Arc<dyn MetricStore>,
    settings_store: Arc<dyn SettingsStore>,
    logger: Arc<EventLogger>,
    dispatcher: Arc<NotificationDispatcher>,
    thresholds: RwLock<Option<MetricThresholds>>,
    emitter: Emitter,
}

/// Records timed metrics and reports threshold breaches through the
/// event logger and the notification dispatcher.
///
/// Metric recording from the `measure_*` wrappers is fire-and-forget:
/// it is queued on the emitter after the wrapped operation's outcome is
/// known and can never change what the caller observes.
#[derive(Clone)]
pub struct PerformanceMonitor {
    inner: Arc<MonitorInner>,
}

impl PerformanceMonitor {
    pub fn new(
        metrics: Arc<dyn MetricStore>,
        settings_store: Arc<dyn SettingsStore>,
        logger: Arc<EventLogger>,
        dispatcher: Arc<NotificationDispatcher>,
        emitter: Emitter,
    ) -> Self {
        Self {
            inner: Arc::new(MonitorInner {
                metrics,
                settings_store,
                logger,
                dispatcher,
                thresholds: RwLock::new(None),
                emitter,
            }),
        }
    }

    /// Persist one metric, then evaluate it against the configured
    /// thresholds.
    pub async fn record_metric(&self, metric: PerformanceMetric) -> TelemetryResult<()> {
        self.inner.metrics.insert_metric(&metric).await?;
        self.check_thresholds(&metric).await;
        Ok(())
    }

    /// Compare a metric against its kind's bounds. Comparisons are
    /// inclusive, so a duration exactly on a bound counts as a breach.
    /// Warnings log only; critical breaches also raise a
    /// `threshold_alert` (anti-fatigue policy).
    async fn check_thresholds(&self, metric: &PerformanceMetric) {
        let thresholds = self.thresholds().await;
        let Some(bounds) = thresholds.for_kind(metric.kind) else {
            return;
        };

        let mut metadata = Map::new();
        metadata.insert("kind".into(), json!(metric.kind.as_str()));
        metadata.insert("name".into(), json!(metric.name));
        metadata.insert("duration_ms".into(), json!(metric.duration_ms));
        metadata.insert("warning_ms".into(), json!(bounds.warning_ms));
        metadata.insert("critical_ms".into(), json!(bounds.critical_ms));

        if metric.duration_ms >= bounds.critical_ms {
            let message = format!(
                "Performance threshold breach: {} '{}' took {:.0}ms (bound {:.0}ms)",
                metric.kind, metric.name, metric.duration_ms, bounds.critical_ms
            );

            self.inner
                .logger
                .error(
                    &message,
                    None,
                    LogContext::default().with_metadata(metadata.clone()),
                )
                .await;

            let notification = Notification::new(
                NotificationKind::ThresholdAlert,
                "Performance threshold breach",
                message,
                NotificationPriority::High,
            )
            .with_data(metadata);

            if let Err(e) = self
                .inner
                .dispatcher
                .send(notification, &[Channel::Database, Channel::Email])
                .await
            {
                log::warn!("Failed to dispatch threshold alert: {e}");
            }
        } else if metric.duration_ms >= bounds.warning_ms {
            let message = format!(
                "Slow operation: {} '{}' took {:.0}ms (warning bound {:.0}ms)",
                metric.kind, metric.name, metric.duration_ms, bounds.warning_ms
            );

            self.inner
                .logger
                .warning(&message, LogContext::default().with_metadata(metadata))
                .await;
        }
    }

    /// Time an async operation and record a `function_execution_time`
    /// metric once its outcome is known. The caller always observes the
    /// original result or error.
    pub async fn measure_function<T, E, Fut>(&self, name: &str, operation: Fut) -> Result<T, E>
    where
        Fut: Future<Output = Result<T, E>>,
    {
        self.measure_function_with(name, operation, |_| None).await
    }

    /// `measure_function` with a hook deriving extra metadata from the
    /// outcome
    pub async fn measure_function_with<T, E, Fut, M>(
        &self,
        name: &str,
        operation: Fut,
        metadata_fn: M,
    ) -> Result<T, E>
    where
        Fut: Future<Output = Result<T, E>>,
        M: FnOnce(&Result<T, E>) -> Option<Map<String, Value>>,
    {
        let started = Instant::now();
        let result = operation.await;
        let duration_ms = started.elapsed().as_secs_f64() * 1000.0;

        let mut metric =
            PerformanceMetric::new(MetricKind::FunctionExecutionTime, name, duration_ms)
                .with_success(result.is_ok());
        if let Some(metadata) = metadata_fn(&result) {
            metric = metric.with_metadata(metadata);
        }

        self.emit_record(metric);
        result
    }

    /// Time an outbound HTTP call and record an `api_response_time`
    /// metric. Success means a 2xx status; a transport error is recorded
    /// with its message and returned to the caller unchanged.
    pub async fn measure_api_response<Fut>(
        &self,
        name: &str,
        user_id: Option<String>,
        path: Option<String>,
        request: Fut,
    ) -> reqwest::Result<reqwest::Response>
    where
        Fut: Future<Output = reqwest::Result<reqwest::Response>>,
    {
        let started = Instant::now();
        let result = request.await;
        let duration_ms = started.elapsed().as_secs_f64() * 1000.0;

        let mut metric = PerformanceMetric::new(MetricKind::ApiResponseTime, name, duration_ms);
        if let Some(user_id) = user_id {
            metric = metric.with_user(user_id);
        }
        if let Some(path) = path {
            metric = metric.with_path(path);
        }

        let mut metadata = Map::new();
        match &result {
            Ok(response) => {
                let status = response.status();
                metric = metric
                    .with_status(status.as_u16())
                    .with_success(status.is_success());
                if let Some(reason) = status.canonical_reason() {
                    metadata.insert("status_text".into(), json!(reason));
                }
            }
            Err(e) => {
                metric = metric.with_success(false);
                metadata.insert("error_name".into(), json!("RequestError"));
                metadata.insert("error_message".into(), json!(e.to_string()));
            }
        }
        if !metadata.is_empty() {
            metric = metric.with_metadata(metadata);
        }

        self.emit_record(metric);
        result
    }

    /// Filtered, time-ranged, limited, most-recent-first
    pub async fn metrics(&self, query: MetricQuery) -> TelemetryResult<Vec<PerformanceMetric>> {
        Ok(self.inner.metrics.query_metrics(&query).await?)
    }

    /// Group metrics from the trailing window by (kind, name)
    pub async fn performance_summary(&self, days: u32) -> TelemetryResult<Vec<MetricSummary>> {
        let query = MetricQuery {
            start: Some(Utc::now() - Duration::days(days as i64)),
            limit: SUMMARY_SCAN_LIMIT,
            ..MetricQuery::default()
        };
        let metrics = self.inner.metrics.query_metrics(&query).await?;

        let mut groups: BTreeMap<(&'static str, String), MetricSummary> = BTreeMap::new();
        for metric in &metrics {
            let entry = groups
                .entry((metric.kind.as_str(), metric.name.clone()))
                .or_insert_with(|| MetricSummary {
                    kind: metric.kind,
                    name: metric.name.clone(),
                    count: 0,
                    min_ms: f64::MAX,
                    max_ms: 0.0,
                    average_ms: 0.0,
                    success_count: 0,
                    failure_count: 0,
                });

            entry.count += 1;
            entry.min_ms = entry.min_ms.min(metric.duration_ms);
            entry.max_ms = entry.max_ms.max(metric.duration_ms);
            // Running average over the group
            entry.average_ms += (metric.duration_ms - entry.average_ms) / entry.count as f64;
            match metric.success {
                Some(true) => entry.success_count += 1,
                Some(false) => entry.failure_count += 1,
                None => {}
            }
        }

        Ok(groups.into_values().collect())
    }

    /// Current thresholds, loading and caching them on first use
    pub async fn thresholds(&self) -> MetricThresholds {
        if let Some(thresholds) = self.inner.thresholds.read().await.clone() {
            return thresholds;
        }

        match self
            .inner
            .settings_store
            .load_setting(SettingKind::PerformanceThresholds)
            .await
        {
            Ok(value) => {
                let thresholds: MetricThresholds = value
                    .and_then(|v| serde_json::from_value(v).ok())
                    .unwrap_or_default();
                *self.inner.thresholds.write().await = Some(thresholds.clone());
                thresholds
            }
            Err(e) => {
                log::warn!("Failed to load metric thresholds, using defaults: {e}");
                MetricThresholds::default()
            }
        }
    }

    /// Merge a partial update, persist it, and refresh the cache
    pub async fn update_thresholds(
        &self,
        update: MetricThresholdsUpdate,
        admin_user_id: &str,
    ) -> TelemetryResult<MetricThresholds> {
        let mut thresholds = self.thresholds().await;
        thresholds.merge(update);

        let value = serde_json::to_value(&thresholds)?;
        self.inner
            .settings_store
            .save_setting(SettingKind::PerformanceThresholds, &value, Some(admin_user_id))
            .await?;

        *self.inner.thresholds.write().await = Some(thresholds.clone());
        Ok(thresholds)
    }

    /// Number of fire-and-forget recordings dropped under back-pressure
    pub fn dropped_recordings(&self) -> u64 {
        self.inner.emitter.dropped_count()
    }

    /// Wait for queued recordings to land (tests and shutdown)
    pub async fn flush(&self) {
        self.inner.emitter.flush().await;
    }

    fn emit_record(&self, metric: PerformanceMetric) {
        let monitor = self.clone();
        self.inner.emitter.emit(async move {
            if let Err(e) = monitor.record_metric(metric).await {
                log::warn!("Failed to record metric: {e}");
            }
        });
    }
}
