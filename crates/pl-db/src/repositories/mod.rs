pub mod archive_repository;
pub mod log_repository;
pub mod metric_repository;
pub mod notification_repository;
pub mod settings_repository;
