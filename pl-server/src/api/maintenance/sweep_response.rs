use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SweepResponse {
    pub success: bool,
    pub deleted: u64,
}
