use crate::Result as TelemetryResult;
use crate::email::render::render_notification;
use crate::email::transport::EmailTransport;

use pl_core::store::{NotificationStore, SettingKind, SettingsStore};
use pl_core::{Notification, NotificationSettings, NotificationSettingsUpdate};

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

/// Delivery channels a notification may be routed through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Database,
    Email,
}

/// Maximum notifications flipped to seen in one batched update
pub const MARK_SEEN_BATCH_SIZE: u32 = 100;

/// Persists notifications and conditionally forwards them to the email
/// transport based on the configured priority floor.
///
/// Settings are loaded lazily once and cached for the process lifetime;
/// an update refreshes only this process's cache. Other instances see
/// the change on their own next load (no invalidation broadcast).
pub struct NotificationDispatcher {
    store: Arc<dyn NotificationStore>,
    settings_store: Arc<dyn SettingsStore>,
    transport: Arc<dyn EmailTransport>,
    cached: RwLock<Option<NotificationSettings>>,
}

impl NotificationDispatcher {
    pub fn new(
        store: Arc<dyn NotificationStore>,
        settings_store: Arc<dyn SettingsStore>,
        transport: Arc<dyn EmailTransport>,
    ) -> Self {
        Self {
            store,
            settings_store,
            transport,
            cached: RwLock::new(None),
        }
    }

    /// Route a notification through the requested channels.
    ///
    /// The database channel persists unconditionally; the email channel
    /// is gated on the settings. An email failure never unwinds the
    /// database write already committed, it is only logged.
    pub async fn send(
        &self,
        notification: Notification,
        channels: &[Channel],
    ) -> TelemetryResult<Option<Uuid>> {
        let settings = self.settings().await;

        let mut persisted = None;
        if channels.contains(&Channel::Database) {
            self.store.insert_notification(&notification).await?;
            persisted = Some(notification.id);
        }

        if channels.contains(&Channel::Email) && self.should_email(&settings, &notification) {
            let message = render_notification(&notification, &settings.email.recipients);
            let outcome = self.transport.send(&message).await;
            if !outcome.success {
                log::warn!(
                    "Email delivery for notification {} did not succeed: {}",
                    notification.id,
                    outcome.error.unwrap_or_else(|| "unknown error".into())
                );
            }
        }

        Ok(persisted)
    }

    fn should_email(&self, settings: &NotificationSettings, notification: &Notification) -> bool {
        if !settings.email.enabled || !settings.kind_enabled(notification.kind) {
            return false;
        }
        if settings.email.recipients.is_empty() {
            log::debug!("Email channel enabled but no recipients configured");
            return false;
        }
        notification.priority.ordinal() >= settings.email.min_priority.ordinal()
    }

    /// Most-recent-first, optionally restricted to unseen
    pub async fn notifications(
        &self,
        limit: u32,
        unseen_only: bool,
    ) -> TelemetryResult<Vec<Notification>> {
        Ok(self.store.recent_notifications(limit, unseen_only).await?)
    }

    pub async fn mark_seen(&self, id: Uuid) -> TelemetryResult<bool> {
        Ok(self.store.mark_seen(id).await?)
    }

    /// Flip unseen notifications in one bounded batch; callers loop to
    /// drain a larger backlog.
    pub async fn mark_all_seen(&self) -> TelemetryResult<u64> {
        Ok(self.store.mark_all_seen(MARK_SEEN_BATCH_SIZE).await?)
    }

    /// Current settings, loading and caching them on first use.
    /// A load failure falls back to defaults without caching, so a later
    /// call can retry the store.
    pub async fn settings(&self) -> NotificationSettings {
        if let Some(settings) = self.cached.read().await.clone() {
            return settings;
        }

        match self.settings_store.load_setting(SettingKind::Notifications).await {
            Ok(value) => {
                let settings: NotificationSettings = value
                    .and_then(|v| serde_json::from_value(v).ok())
                    .unwrap_or_default();
                *self.cached.write().await = Some(settings.clone());
                settings
            }
            Err(e) => {
                log::warn!("Failed to load notification settings, using defaults: {e}");
                NotificationSettings::default()
            }
        }
    }

    /// Merge a partial update, persist it, and refresh the cache
    pub async fn update_settings(
        &self,
        update: NotificationSettingsUpdate,
        admin_user_id: &str,
    ) -> TelemetryResult<NotificationSettings> {
        let mut settings = self.settings().await;
        settings.merge(update);

        let value = serde_json::to_value(&settings)?;
        self.settings_store
            .save_setting(SettingKind::Notifications, &value, Some(admin_user_id))
            .await?;

        *self.cached.write().await = Some(settings.clone());
        Ok(settings)
    }
}
