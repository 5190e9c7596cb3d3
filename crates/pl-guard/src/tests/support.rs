//! Minimal recording backend so guard tests can observe what the event
//! logger was asked to persist.

use pl_core::store::{LogStore, NotificationStore, SettingKind, SettingsStore};
use pl_core::{LogEntry, LogLevel, Notification, Result as CoreErrorResult};
use pl_telemetry::email::transport::{EmailMessage, EmailOutcome, EmailTransport};
use pl_telemetry::{EventLogger, NotificationDispatcher};

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

#[derive(Default)]
pub struct RecordingBackend {
    logs: Mutex<Vec<LogEntry>>,
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingBackend {
    pub fn logs(&self) -> Vec<LogEntry> {
        self.logs.lock().unwrap().clone()
    }

    pub fn logs_of(&self, level: LogLevel) -> Vec<LogEntry> {
        self.logs()
            .into_iter()
            .filter(|e| e.level == level)
            .collect()
    }
}

#[async_trait]
impl LogStore for RecordingBackend {
    async fn insert_log(&self, entry: &LogEntry) -> CoreErrorResult<()> {
        self.logs.lock().unwrap().push(entry.clone());
        Ok(())
    }

    async fn recent_logs(
        &self,
        level: Option<LogLevel>,
        limit: u32,
    ) -> CoreErrorResult<Vec<LogEntry>> {
        let mut entries: Vec<LogEntry> = self
            .logs()
            .into_iter()
            .filter(|e| level.is_none_or(|l| e.level == l))
            .collect();
        entries.truncate(limit as usize);
        Ok(entries)
    }

    async fn logs_older_than(
        &self,
        _level: Option<LogLevel>,
        _cutoff: DateTime<Utc>,
        _limit: u32,
    ) -> CoreErrorResult<Vec<LogEntry>> {
        Ok(Vec::new())
    }

    async fn expired_log_ids(
        &self,
        _level: Option<LogLevel>,
        _cutoff: DateTime<Utc>,
        _limit: u32,
    ) -> CoreErrorResult<Vec<Uuid>> {
        Ok(Vec::new())
    }

    async fn delete_logs(&self, _ids: &[Uuid]) -> CoreErrorResult<u64> {
        Ok(0)
    }
}

#[async_trait]
impl NotificationStore for RecordingBackend {
    async fn insert_notification(&self, notification: &Notification) -> CoreErrorResult<()> {
        self.notifications.lock().unwrap().push(notification.clone());
        Ok(())
    }

    async fn recent_notifications(
        &self,
        limit: u32,
        unseen_only: bool,
    ) -> CoreErrorResult<Vec<Notification>> {
        let mut notifications: Vec<Notification> = self
            .notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|n| !unseen_only || !n.seen)
            .cloned()
            .collect();
        notifications.truncate(limit as usize);
        Ok(notifications)
    }

    async fn mark_seen(&self, _id: Uuid) -> CoreErrorResult<bool> {
        Ok(false)
    }

    async fn mark_all_seen(&self, _limit: u32) -> CoreErrorResult<u64> {
        Ok(0)
    }
}

#[async_trait]
impl SettingsStore for RecordingBackend {
    async fn load_setting(&self, _kind: SettingKind) -> CoreErrorResult<Option<Value>> {
        Ok(None)
    }

    async fn save_setting(
        &self,
        _kind: SettingKind,
        _value: &Value,
        _updated_by: Option<&str>,
    ) -> CoreErrorResult<()> {
        Ok(())
    }
}

#[async_trait]
impl EmailTransport for RecordingBackend {
    async fn send(&self, _message: &EmailMessage) -> EmailOutcome {
        EmailOutcome::ok()
    }
}

/// An event logger wired onto the recording backend
pub fn recording_logger() -> (Arc<RecordingBackend>, Arc<EventLogger>) {
    let backend = Arc::new(RecordingBackend::default());
    let dispatcher = Arc::new(NotificationDispatcher::new(
        backend.clone(),
        backend.clone(),
        backend.clone(),
    ));
    let logger = Arc::new(EventLogger::new(backend.clone(), dispatcher));
    (backend, logger)
}
