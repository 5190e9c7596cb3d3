use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid log level: {value} {location}")]
    InvalidLogLevel {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid notification kind: {value} {location}")]
    InvalidNotificationKind {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid notification priority: {value} {location}")]
    InvalidPriority {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid metric kind: {value} {location}")]
    InvalidMetricKind {
        value: String,
        location: ErrorLocation,
    },

    #[error("Serialization error: {message} {location}")]
    Serialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Store error: {message} {location}")]
    Store {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a store error from any failure in a persistence backend
    #[track_caller]
    pub fn store<S: Into<String>>(message: S) -> Self {
        CoreError::Store {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    #[track_caller]
    fn from(e: serde_json::Error) -> Self {
        CoreError::Serialization {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
