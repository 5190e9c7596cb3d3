//! Persistence seams for the telemetry pipeline.
//!
//! Services take these traits as injected dependencies so tests can
//! substitute in-memory fakes and so the SQLite backend in `pl-db` stays
//! swappable for a hosted document store.

use crate::Result;
use crate::models::archive_bundle::ArchiveBundle;
use crate::models::log_entry::LogEntry;
use crate::models::log_level::LogLevel;
use crate::models::metric_kind::MetricKind;
use crate::models::notification::Notification;
use crate::models::performance_metric::PerformanceMetric;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

/// Which singleton settings record a `SettingsStore` call addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    Retention,
    Notifications,
    PerformanceThresholds,
}

impl SettingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Retention => "retention",
            Self::Notifications => "notifications",
            Self::PerformanceThresholds => "performance_thresholds",
        }
    }
}

#[async_trait]
pub trait LogStore: Send + Sync {
    async fn insert_log(&self, entry: &LogEntry) -> Result<()>;

    /// Most-recent-first, optionally filtered by level
    async fn recent_logs(&self, level: Option<LogLevel>, limit: u32) -> Result<Vec<LogEntry>>;

    /// Full entries with `timestamp <= cutoff`, oldest first
    async fn logs_older_than(
        &self,
        level: Option<LogLevel>,
        cutoff: DateTime<Utc>,
        limit: u32,
    ) -> Result<Vec<LogEntry>>;

    /// Ids of entries with `timestamp <= cutoff`, oldest first
    async fn expired_log_ids(
        &self,
        level: Option<LogLevel>,
        cutoff: DateTime<Utc>,
        limit: u32,
    ) -> Result<Vec<Uuid>>;

    /// Delete the given entries in one atomic batch, returning the number
    /// actually removed
    async fn delete_logs(&self, ids: &[Uuid]) -> Result<u64>;
}

#[async_trait]
pub trait NotificationStore: Send + Sync {
    async fn insert_notification(&self, notification: &Notification) -> Result<()>;

    /// Most-recent-first, optionally restricted to unseen
    async fn recent_notifications(
        &self,
        limit: u32,
        unseen_only: bool,
    ) -> Result<Vec<Notification>>;

    /// Returns false when no notification with that id exists
    async fn mark_seen(&self, id: Uuid) -> Result<bool>;

    /// Flip up to `limit` unseen notifications in one batch, returning
    /// the number updated
    async fn mark_all_seen(&self, limit: u32) -> Result<u64>;
}

/// Filter for metric reads
#[derive(Debug, Clone, Default)]
pub struct MetricQuery {
    pub kind: Option<MetricKind>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub limit: u32,
}

#[async_trait]
pub trait MetricStore: Send + Sync {
    async fn insert_metric(&self, metric: &PerformanceMetric) -> Result<()>;

    /// Most-recent-first within the query's bounds
    async fn query_metrics(&self, query: &MetricQuery) -> Result<Vec<PerformanceMetric>>;
}

#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// `None` when the record has never been written
    async fn load_setting(&self, kind: SettingKind) -> Result<Option<Value>>;

    async fn save_setting(
        &self,
        kind: SettingKind,
        value: &Value,
        updated_by: Option<&str>,
    ) -> Result<()>;
}

#[async_trait]
pub trait ArchiveStore: Send + Sync {
    async fn insert_archive(&self, bundle: &ArchiveBundle) -> Result<()>;
}
