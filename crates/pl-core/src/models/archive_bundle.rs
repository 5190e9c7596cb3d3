use crate::models::log_entry::LogEntry;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A snapshot of log entries captured prior to their eventual deletion.
///
/// Bundles are created by the archival step only and are never the
/// target of automatic deletion themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveBundle {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub logs_count: u32,
    pub entries: Vec<LogEntry>,
}

impl ArchiveBundle {
    pub fn new(created_by: impl Into<String>, entries: Vec<LogEntry>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            created_by: created_by.into(),
            logs_count: entries.len() as u32,
            entries,
        }
    }
}
