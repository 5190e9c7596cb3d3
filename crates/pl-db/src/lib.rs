pub mod error;
pub mod repositories;
pub mod store;

pub use error::{DbError, Result};
pub use repositories::archive_repository::ArchiveRepository;
pub use repositories::log_repository::LogRepository;
pub use repositories::metric_repository::MetricRepository;
pub use repositories::notification_repository::NotificationRepository;
pub use repositories::settings_repository::SettingsRepository;
pub use store::SqliteTelemetryStore;
