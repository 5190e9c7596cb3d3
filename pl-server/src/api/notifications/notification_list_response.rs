use crate::api::notifications::notification_dto::NotificationDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct NotificationListResponse {
    pub notifications: Vec<NotificationDto>,
}
