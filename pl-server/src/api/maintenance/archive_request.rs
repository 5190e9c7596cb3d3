use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ArchiveRequest {
    /// Entries older than this instant are captured into the bundle
    pub cutoff: DateTime<Utc>,
}
