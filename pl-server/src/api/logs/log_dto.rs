use pl_core::LogEntry;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

/// Wire form of a persisted log entry; unset fields are omitted
#[derive(Debug, Serialize)]
pub struct LogDto {
    pub id: Uuid,
    pub level: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl From<LogEntry> for LogDto {
    fn from(entry: LogEntry) -> Self {
        Self {
            id: entry.id,
            level: entry.level.as_str().to_string(),
            message: entry.message,
            timestamp: entry.timestamp,
            user_id: entry.user_id,
            user_email: entry.user_email,
            path: entry.path,
            ip: entry.ip,
            user_agent: entry.user_agent,
            metadata: entry.metadata,
            stack: entry.stack,
        }
    }
}
