use crate::models::notification_kind::NotificationKind;
use crate::models::notification_priority::NotificationPriority;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A persisted notification.
///
/// Created by the event logger or the performance monitor; the only
/// mutation after creation is flipping `seen`. Never auto-deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub priority: NotificationPriority,
    pub timestamp: DateTime<Utc>,
    pub seen: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
}

impl Notification {
    pub fn new(
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        priority: NotificationPriority,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            title: title.into(),
            message: message.into(),
            priority,
            timestamp: Utc::now(),
            seen: false,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Map<String, Value>) -> Self {
        self.data = Some(data);
        self
    }
}
