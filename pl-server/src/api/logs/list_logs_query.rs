use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListLogsQuery {
    /// Filter to one level (info, warning, error, security)
    pub level: Option<String>,
    /// Maximum entries returned (default 100, capped at 500)
    pub limit: Option<u32>,
}
