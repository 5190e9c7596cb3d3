//! Telemetry, retention and alerting services for the Prepline backend.
//!
//! The pipeline: request guards and application code emit events into
//! the [`EventLogger`], which persists and classifies them and forwards
//! significant ones to the [`NotificationDispatcher`]. The
//! [`PerformanceMonitor`] records timed metrics and reports threshold
//! breaches back through both. The [`RetentionManager`] sweeps and
//! archives the event stream on a schedule.
//!
//! Every service takes its persistence seams as injected trait objects
//! (`pl-core::store`), so tests run against in-memory fakes and the
//! SQLite backend stays swappable. Apart from admin operations, the
//! pipeline is a non-critical-path dependency: its internal failures
//! degrade to the process log instead of reaching callers.

pub mod dispatcher;
pub mod email;
pub mod emitter;
pub mod error;
pub mod logger;
pub mod monitor;
pub mod retention;

pub use dispatcher::{Channel, MARK_SEEN_BATCH_SIZE, NotificationDispatcher};
pub use email::{DisabledMailer, EmailMessage, EmailOutcome, EmailTransport, HttpRelayMailer};
pub use emitter::Emitter;
pub use error::{Result, TelemetryError};
pub use logger::EventLogger;
pub use monitor::{MetricSummary, PerformanceMonitor};
pub use retention::{
    ARCHIVE_BATCH_SIZE, ArchiveOutcome, DELETE_BATCH_SIZE, RetentionManager, SweepOutcome,
};

#[cfg(test)]
mod tests;
