use pl_core::Notification;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

/// Wire form of a persisted notification
#[derive(Debug, Serialize)]
pub struct NotificationDto {
    pub id: Uuid,
    pub kind: String,
    pub title: String,
    pub message: String,
    pub priority: String,
    pub timestamp: DateTime<Utc>,
    pub seen: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
}

impl From<Notification> for NotificationDto {
    fn from(notification: Notification) -> Self {
        Self {
            id: notification.id,
            kind: notification.kind.as_str().to_string(),
            title: notification.title,
            message: notification.message,
            priority: notification.priority.as_str().to_string(),
            timestamp: notification.timestamp,
            seen: notification.seen,
            data: notification.data,
        }
    }
}
