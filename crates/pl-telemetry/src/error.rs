use pl_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Store operation failed: {source} {location}")]
    Store {
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Settings serialization failed: {source} {location}")]
    Settings {
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl From<CoreError> for TelemetryError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for TelemetryError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Settings {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, TelemetryError>;
