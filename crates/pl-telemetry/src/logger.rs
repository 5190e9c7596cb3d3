use crate::dispatcher::{Channel, NotificationDispatcher};

use pl_core::store::LogStore;
use pl_core::{
    ErrorDetails, LogContext, LogEntry, LogLevel, Notification, NotificationKind,
    Result as CoreErrorResult, SignificanceRules,
};

use std::sync::Arc;

use serde_json::{Map, json};
use uuid::Uuid;

/// Ingests log entries, persists them, and forwards significant error
/// and security events to the notification dispatcher.
///
/// Logging always succeeds from the caller's point of view: a store
/// failure degrades to the process log and yields `None`. A dispatch
/// failure is likewise confined to the process log so it can never mask
/// the original log result.
pub struct EventLogger {
    logs: Arc<dyn LogStore>,
    dispatcher: Arc<NotificationDispatcher>,
    rules: SignificanceRules,
}

impl EventLogger {
    pub fn new(logs: Arc<dyn LogStore>, dispatcher: Arc<NotificationDispatcher>) -> Self {
        Self::with_rules(logs, dispatcher, SignificanceRules::default())
    }

    pub fn with_rules(
        logs: Arc<dyn LogStore>,
        dispatcher: Arc<NotificationDispatcher>,
        rules: SignificanceRules,
    ) -> Self {
        Self {
            logs,
            dispatcher,
            rules,
        }
    }

    /// Persist one entry. Returns the entry id, or `None` when the store
    /// rejected the write.
    pub async fn log(&self, level: LogLevel, message: &str, ctx: LogContext) -> Option<Uuid> {
        self.persist(LogEntry::new(level, message).with_context(ctx))
            .await
    }

    pub async fn info(&self, message: &str, ctx: LogContext) -> Option<Uuid> {
        self.log(LogLevel::Info, message, ctx).await
    }

    pub async fn warning(&self, message: &str, ctx: LogContext) -> Option<Uuid> {
        self.log(LogLevel::Warning, message, ctx).await
    }

    /// Persist an error entry, merging the failure's name and message
    /// into the metadata, then dispatch an `error_alert` when the
    /// significance rules flag it.
    pub async fn error(
        &self,
        message: &str,
        details: Option<&ErrorDetails>,
        ctx: LogContext,
    ) -> Option<Uuid> {
        let mut ctx = ctx;
        if let Some(details) = details {
            let metadata = ctx.metadata.get_or_insert_with(Map::new);
            metadata.insert("error_name".into(), json!(details.name));
            metadata.insert("error_message".into(), json!(details.message));
        }

        let mut entry = LogEntry::new(LogLevel::Error, message).with_context(ctx);
        if let Some(stack) = details.and_then(|d| d.stack.clone()) {
            entry = entry.with_stack(stack);
        }

        let id = self.persist(entry).await;

        if let Some(priority) = self.rules.error_alert_priority(message, details) {
            let mut data = Map::new();
            data.insert("message".into(), json!(message));
            if let Some(details) = details {
                data.insert("error_name".into(), json!(details.name));
            }
            if let Some(id) = id {
                data.insert("log_id".into(), json!(id.to_string()));
            }

            let notification =
                Notification::new(NotificationKind::ErrorAlert, "Application error", message, priority)
                    .with_data(data);

            if let Err(e) = self
                .dispatcher
                .send(notification, &[Channel::Database, Channel::Email])
                .await
            {
                log::warn!("Failed to dispatch error alert: {e}");
            }
        }

        id
    }

    /// Persist a security entry, then dispatch a `security_alert` when
    /// the significance rules flag it (critical for attack/injection
    /// wording, high otherwise).
    pub async fn security(&self, message: &str, ctx: LogContext) -> Option<Uuid> {
        let ip = ctx.ip.clone();
        let id = self
            .persist(LogEntry::new(LogLevel::Security, message).with_context(ctx))
            .await;

        if let Some(priority) = self.rules.security_alert_priority(message) {
            let mut data = Map::new();
            data.insert("message".into(), json!(message));
            if let Some(ip) = ip {
                data.insert("ip".into(), json!(ip));
            }
            if let Some(id) = id {
                data.insert("log_id".into(), json!(id.to_string()));
            }

            let notification = Notification::new(
                NotificationKind::SecurityAlert,
                "Security alert",
                message,
                priority,
            )
            .with_data(data);

            if let Err(e) = self
                .dispatcher
                .send(notification, &[Channel::Database, Channel::Email])
                .await
            {
                log::warn!("Failed to dispatch security alert: {e}");
            }
        }

        id
    }

    /// Most recent entries for the admin surface
    pub async fn recent(
        &self,
        level: Option<LogLevel>,
        limit: u32,
    ) -> CoreErrorResult<Vec<LogEntry>> {
        self.logs.recent_logs(level, limit).await
    }

    async fn persist(&self, entry: LogEntry) -> Option<Uuid> {
        let id = entry.id;
        match self.logs.insert_log(&entry).await {
            Ok(()) => Some(id),
            Err(e) => {
                log::error!("Failed to persist log entry: {e}");
                None
            }
        }
    }
}
