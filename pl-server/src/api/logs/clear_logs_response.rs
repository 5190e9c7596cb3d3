use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ClearLogsResponse {
    pub deleted: u64,
}
