use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct ArchiveResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_id: Option<Uuid>,
    pub archived: u32,
}
