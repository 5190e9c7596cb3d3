use crate::models::notification_kind::NotificationKind;
use crate::models::notification_priority::NotificationPriority;

use serde::{Deserialize, Serialize};

/// Email channel configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailSettings {
    pub enabled: bool,
    pub recipients: Vec<String>,
    /// Priority floor below which email delivery is suppressed
    pub min_priority: NotificationPriority,
}

impl Default for EmailSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            recipients: Vec::new(),
            min_priority: NotificationPriority::High,
        }
    }
}

/// Notification dispatch configuration.
///
/// Singleton settings record with the same load/merge/persist discipline
/// as the retention policy. The per-kind toggles gate the email channel
/// only; database persistence is unconditional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    pub email: EmailSettings,
    pub error_alerts: bool,
    pub security_alerts: bool,
    pub threshold_alerts: bool,
    pub system_events: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email: EmailSettings::default(),
            error_alerts: true,
            security_alerts: true,
            threshold_alerts: true,
            system_events: true,
        }
    }
}

impl NotificationSettings {
    pub fn kind_enabled(&self, kind: NotificationKind) -> bool {
        match kind {
            NotificationKind::ErrorAlert => self.error_alerts,
            NotificationKind::SecurityAlert => self.security_alerts,
            NotificationKind::ThresholdAlert => self.threshold_alerts,
            NotificationKind::SystemEvent => self.system_events,
        }
    }

    pub fn merge(&mut self, update: NotificationSettingsUpdate) {
        if let Some(email) = update.email {
            if let Some(enabled) = email.enabled {
                self.email.enabled = enabled;
            }
            if let Some(recipients) = email.recipients {
                self.email.recipients = recipients;
            }
            if let Some(min_priority) = email.min_priority {
                self.email.min_priority = min_priority;
            }
        }
        if let Some(error_alerts) = update.error_alerts {
            self.error_alerts = error_alerts;
        }
        if let Some(security_alerts) = update.security_alerts {
            self.security_alerts = security_alerts;
        }
        if let Some(threshold_alerts) = update.threshold_alerts {
            self.threshold_alerts = threshold_alerts;
        }
        if let Some(system_events) = update.system_events {
            self.system_events = system_events;
        }
    }
}

/// Partial email settings update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailSettingsUpdate {
    pub enabled: Option<bool>,
    pub recipients: Option<Vec<String>>,
    pub min_priority: Option<NotificationPriority>,
}

/// Partial notification settings update from the admin surface
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettingsUpdate {
    pub email: Option<EmailSettingsUpdate>,
    pub error_alerts: Option<bool>,
    pub security_alerts: Option<bool>,
    pub threshold_alerts: Option<bool>,
    pub system_events: Option<bool>,
}
