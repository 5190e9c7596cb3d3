//! `pl-core` store trait implementations backed by the SQLite pool.
//!
//! Failures are reported as `CoreError::Store`; the telemetry services
//! treat them as non-critical and degrade to the process log.

use crate::repositories::archive_repository::ArchiveRepository;
use crate::repositories::log_repository::LogRepository;
use crate::repositories::metric_repository::MetricRepository;
use crate::repositories::notification_repository::NotificationRepository;
use crate::repositories::settings_repository::SettingsRepository;

use pl_core::store::{
    ArchiveStore, LogStore, MetricQuery, MetricStore, NotificationStore, SettingKind,
    SettingsStore,
};
use pl_core::{
    ArchiveBundle, CoreError, LogEntry, LogLevel, Notification, PerformanceMetric,
    Result as CoreErrorResult,
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(Clone)]
pub struct SqliteTelemetryStore {
    pool: SqlitePool,
}

impl SqliteTelemetryStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LogStore for SqliteTelemetryStore {
    async fn insert_log(&self, entry: &LogEntry) -> CoreErrorResult<()> {
        LogRepository::create(&self.pool, entry)
            .await
            .map_err(|e| CoreError::store(e.to_string()))
    }

    async fn recent_logs(
        &self,
        level: Option<LogLevel>,
        limit: u32,
    ) -> CoreErrorResult<Vec<LogEntry>> {
        LogRepository::find_recent(&self.pool, level, limit as i64)
            .await
            .map_err(|e| CoreError::store(e.to_string()))
    }

    async fn logs_older_than(
        &self,
        level: Option<LogLevel>,
        cutoff: DateTime<Utc>,
        limit: u32,
    ) -> CoreErrorResult<Vec<LogEntry>> {
        LogRepository::find_older_than(&self.pool, level, cutoff, limit as i64)
            .await
            .map_err(|e| CoreError::store(e.to_string()))
    }

    async fn expired_log_ids(
        &self,
        level: Option<LogLevel>,
        cutoff: DateTime<Utc>,
        limit: u32,
    ) -> CoreErrorResult<Vec<Uuid>> {
        LogRepository::find_expired_ids(&self.pool, level, cutoff, limit as i64)
            .await
            .map_err(|e| CoreError::store(e.to_string()))
    }

    async fn delete_logs(&self, ids: &[Uuid]) -> CoreErrorResult<u64> {
        LogRepository::delete_by_ids(&self.pool, ids)
            .await
            .map_err(|e| CoreError::store(e.to_string()))
    }
}

#[async_trait]
impl NotificationStore for SqliteTelemetryStore {
    async fn insert_notification(&self, notification: &Notification) -> CoreErrorResult<()> {
        NotificationRepository::create(&self.pool, notification)
            .await
            .map_err(|e| CoreError::store(e.to_string()))
    }

    async fn recent_notifications(
        &self,
        limit: u32,
        unseen_only: bool,
    ) -> CoreErrorResult<Vec<Notification>> {
        NotificationRepository::find_recent(&self.pool, limit as i64, unseen_only)
            .await
            .map_err(|e| CoreError::store(e.to_string()))
    }

    async fn mark_seen(&self, id: Uuid) -> CoreErrorResult<bool> {
        NotificationRepository::mark_seen(&self.pool, id)
            .await
            .map_err(|e| CoreError::store(e.to_string()))
    }

    async fn mark_all_seen(&self, limit: u32) -> CoreErrorResult<u64> {
        NotificationRepository::mark_all_seen(&self.pool, limit as i64)
            .await
            .map_err(|e| CoreError::store(e.to_string()))
    }
}

#[async_trait]
impl MetricStore for SqliteTelemetryStore {
    async fn insert_metric(&self, metric: &PerformanceMetric) -> CoreErrorResult<()> {
        MetricRepository::create(&self.pool, metric)
            .await
            .map_err(|e| CoreError::store(e.to_string()))
    }

    async fn query_metrics(&self, query: &MetricQuery) -> CoreErrorResult<Vec<PerformanceMetric>> {
        MetricRepository::find_filtered(&self.pool, query)
            .await
            .map_err(|e| CoreError::store(e.to_string()))
    }
}

#[async_trait]
impl SettingsStore for SqliteTelemetryStore {
    async fn load_setting(&self, kind: SettingKind) -> CoreErrorResult<Option<Value>> {
        SettingsRepository::load(&self.pool, kind)
            .await
            .map_err(|e| CoreError::store(e.to_string()))
    }

    async fn save_setting(
        &self,
        kind: SettingKind,
        value: &Value,
        updated_by: Option<&str>,
    ) -> CoreErrorResult<()> {
        SettingsRepository::save(&self.pool, kind, value, updated_by)
            .await
            .map_err(|e| CoreError::store(e.to_string()))
    }
}

#[async_trait]
impl ArchiveStore for SqliteTelemetryStore {
    async fn insert_archive(&self, bundle: &ArchiveBundle) -> CoreErrorResult<()> {
        ArchiveRepository::create(&self.pool, bundle)
            .await
            .map_err(|e| CoreError::store(e.to_string()))
    }
}
