use crate::models::log_level::LogLevel;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Optional request/caller fields attached to a log entry.
///
/// User identifiers are opaque strings supplied by the identity
/// collaborator; this subsystem never interprets them.
#[derive(Debug, Clone, Default)]
pub struct LogContext {
    pub user_id: Option<String>,
    pub user_email: Option<String>,
    pub path: Option<String>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub metadata: Option<Map<String, Value>>,
}

impl LogContext {
    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// A persisted log entry.
///
/// Fields left unset are `None` and are omitted from the serialized
/// record entirely, so downstream consumers never see null placeholders.
/// Entries are immutable once written; only the retention sweep removes
/// them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: Uuid,
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            level,
            message: message.into(),
            timestamp: Utc::now(),
            user_id: None,
            user_email: None,
            path: None,
            ip: None,
            user_agent: None,
            metadata: None,
            stack: None,
        }
    }

    pub fn with_context(mut self, ctx: LogContext) -> Self {
        self.user_id = ctx.user_id;
        self.user_email = ctx.user_email;
        self.path = ctx.path;
        self.ip = ctx.ip;
        self.user_agent = ctx.user_agent;
        self.metadata = ctx.metadata;
        self
    }

    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }
}
