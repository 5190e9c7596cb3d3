use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListNotificationsQuery {
    /// Maximum notifications returned (default 50, capped at 200)
    pub limit: Option<u32>,
    /// Restrict to notifications not yet marked seen
    pub unseen_only: Option<bool>,
}
