use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    /// Trailing window in days (default 7, capped at 90)
    pub days: Option<u32>,
}
