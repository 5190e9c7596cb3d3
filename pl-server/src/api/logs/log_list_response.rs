use crate::api::logs::log_dto::LogDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LogListResponse {
    pub logs: Vec<LogDto>,
}
