use crate::Result as TelemetryResult;
use crate::logger::EventLogger;

use pl_core::store::{ArchiveStore, LogStore, SettingKind, SettingsStore};
use pl_core::{
    ArchiveBundle, ErrorDetails, LogContext, LogLevel, Retention, RetentionPolicy,
    RetentionPolicyUpdate,
};

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use serde_json::{Map, json};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Maximum entries deleted per level per sweep invocation
pub const DELETE_BATCH_SIZE: u32 = 500;
/// Maximum entries captured into one archive bundle
pub const ARCHIVE_BATCH_SIZE: u32 = 1000;

/// Result of one retention sweep
#[derive(Debug, Clone, Serialize)]
pub struct SweepOutcome {
    pub success: bool,
    pub deleted: u64,
}

/// Result of one archival run
#[derive(Debug, Clone, Serialize)]
pub struct ArchiveOutcome {
    pub archive_id: Option<Uuid>,
    pub archived: u32,
}

/// Applies per-level expiry policies against the log store, optionally
/// archiving entries first, and reports outcomes through the event
/// logger.
///
/// The policy is loaded lazily once and cached for the process lifetime;
/// an update refreshes only this process's cache.
pub struct RetentionManager {
    logs: Arc<dyn LogStore>,
    archives: Arc<dyn ArchiveStore>,
    settings_store: Arc<dyn SettingsStore>,
    logger: Arc<EventLogger>,
    cached: RwLock<Option<RetentionPolicy>>,
}

impl RetentionManager {
    pub fn new(
        logs: Arc<dyn LogStore>,
        archives: Arc<dyn ArchiveStore>,
        settings_store: Arc<dyn SettingsStore>,
        logger: Arc<EventLogger>,
    ) -> Self {
        Self {
            logs,
            archives,
            settings_store,
            logger,
            cached: RwLock::new(None),
        }
    }

    /// Current policy, loading and caching it on first use
    pub async fn retention_settings(&self) -> RetentionPolicy {
        if let Some(policy) = *self.cached.read().await {
            return policy;
        }

        match self.settings_store.load_setting(SettingKind::Retention).await {
            Ok(value) => {
                let policy: RetentionPolicy = value
                    .and_then(|v| serde_json::from_value(v).ok())
                    .unwrap_or_default();
                *self.cached.write().await = Some(policy);
                policy
            }
            Err(e) => {
                log::warn!("Failed to load retention policy, using defaults: {e}");
                RetentionPolicy::default()
            }
        }
    }

    /// Merge a partial update into the policy. The change is written to
    /// the security audit trail naming the admin *before* it takes
    /// effect.
    pub async fn update_retention_settings(
        &self,
        update: RetentionPolicyUpdate,
        admin_user_id: &str,
    ) -> TelemetryResult<RetentionPolicy> {
        let previous = self.retention_settings().await;
        let mut merged = previous;
        merged.merge(update);

        let mut metadata = Map::new();
        metadata.insert("previous".into(), serde_json::to_value(previous)?);
        metadata.insert("updated".into(), serde_json::to_value(merged)?);

        // Audit before effect: the change is recorded even if the
        // persist below fails.
        self.logger
            .security(
                "Retention settings updated",
                LogContext {
                    user_id: Some(admin_user_id.to_string()),
                    metadata: Some(metadata),
                    ..LogContext::default()
                },
            )
            .await;

        let value = serde_json::to_value(merged)?;
        self.settings_store
            .save_setting(SettingKind::Retention, &value, Some(admin_user_id))
            .await?;

        *self.cached.write().await = Some(merged);
        Ok(merged)
    }

    /// Delete expired entries for every level with a finite retention.
    ///
    /// Each level removes at most `DELETE_BATCH_SIZE` entries per
    /// invocation; callers re-invoke to drain a larger backlog. Any
    /// failure is caught, best-effort logged, and reported through the
    /// outcome, never propagated.
    pub async fn apply_retention_policy(&self) -> SweepOutcome {
        let policy = self.retention_settings().await;
        let mut deleted_total: u64 = 0;

        match self.sweep_levels(&policy, &mut deleted_total).await {
            Ok(()) => {
                let mut metadata = Map::new();
                metadata.insert("deleted_count".into(), json!(deleted_total));
                self.logger
                    .info(
                        &format!("Retention sweep removed {deleted_total} log entries"),
                        LogContext::default().with_metadata(metadata),
                    )
                    .await;

                SweepOutcome {
                    success: true,
                    deleted: deleted_total,
                }
            }
            Err(e) => {
                // Best-effort: the error log is itself fault-tolerant
                self.logger
                    .error(
                        "Retention policy sweep failed",
                        Some(&ErrorDetails::new("RetentionError", e.to_string())),
                        LogContext::default(),
                    )
                    .await;

                SweepOutcome {
                    success: false,
                    deleted: deleted_total,
                }
            }
        }
    }

    async fn sweep_levels(
        &self,
        policy: &RetentionPolicy,
        deleted_total: &mut u64,
    ) -> TelemetryResult<()> {
        for level in LogLevel::ALL {
            let days = match policy.for_level(level) {
                Retention::Days(days) => days,
                // Levels kept forever are never swept, regardless of age
                Retention::Forever => continue,
            };

            let cutoff = Utc::now() - Duration::days(days as i64);
            let ids = self
                .logs
                .expired_log_ids(Some(level), cutoff, DELETE_BATCH_SIZE)
                .await?;
            if ids.is_empty() {
                continue;
            }

            *deleted_total += self.logs.delete_logs(&ids).await?;
        }

        Ok(())
    }

    /// Snapshot entries older than the cutoff into one archive bundle.
    /// Archival never deletes; expiry remains the sweep's job.
    pub async fn archive_logs(
        &self,
        cutoff: DateTime<Utc>,
        admin_user_id: &str,
    ) -> TelemetryResult<ArchiveOutcome> {
        let entries = self
            .logs
            .logs_older_than(None, cutoff, ARCHIVE_BATCH_SIZE)
            .await?;

        if entries.is_empty() {
            return Ok(ArchiveOutcome {
                archive_id: None,
                archived: 0,
            });
        }

        let bundle = ArchiveBundle::new(admin_user_id, entries);
        self.archives.insert_archive(&bundle).await?;

        let mut metadata = Map::new();
        metadata.insert("archive_id".into(), json!(bundle.id.to_string()));
        metadata.insert("logs_count".into(), json!(bundle.logs_count));
        self.logger
            .info(
                &format!("Archived {} log entries", bundle.logs_count),
                LogContext {
                    user_id: Some(admin_user_id.to_string()),
                    metadata: Some(metadata),
                    ..LogContext::default()
                },
            )
            .await;

        Ok(ArchiveOutcome {
            archive_id: Some(bundle.id),
            archived: bundle.logs_count,
        })
    }

    /// Drain the whole log collection in bounded batches, then record
    /// the wipe on the security audit trail with the admin's identity.
    pub async fn clear_all_logs(&self, admin_user_id: &str) -> TelemetryResult<u64> {
        let cutoff = Utc::now();
        let mut deleted_total: u64 = 0;

        loop {
            let ids = self
                .logs
                .expired_log_ids(None, cutoff, DELETE_BATCH_SIZE)
                .await?;
            if ids.is_empty() {
                break;
            }

            deleted_total += self.logs.delete_logs(&ids).await?;

            if (ids.len() as u32) < DELETE_BATCH_SIZE {
                break;
            }
        }

        let mut metadata = Map::new();
        metadata.insert("deleted_count".into(), json!(deleted_total));
        self.logger
            .security(
                "System logs cleared by administrator",
                LogContext {
                    user_id: Some(admin_user_id.to_string()),
                    metadata: Some(metadata),
                    ..LogContext::default()
                },
            )
            .await;

        Ok(deleted_total)
    }
}
