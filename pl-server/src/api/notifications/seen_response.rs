use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SeenResponse {
    pub updated: u64,
}
