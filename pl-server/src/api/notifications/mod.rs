pub mod list_notifications_query;
pub mod notification_dto;
pub mod notification_list_response;
pub mod notifications;
pub mod seen_response;
