use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Category of a dispatched notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Significant application error
    ErrorAlert,
    /// Security detection (rate limit, suspicious request, audit)
    SecurityAlert,
    /// Performance metric breached its critical bound
    ThresholdAlert,
    /// Operational event (sweeps, archival, lifecycle)
    SystemEvent,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ErrorAlert => "error_alert",
            Self::SecurityAlert => "security_alert",
            Self::ThresholdAlert => "threshold_alert",
            Self::SystemEvent => "system_event",
        }
    }
}

impl FromStr for NotificationKind {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "error_alert" => Ok(Self::ErrorAlert),
            "security_alert" => Ok(Self::SecurityAlert),
            "threshold_alert" => Ok(Self::ThresholdAlert),
            "system_event" => Ok(Self::SystemEvent),
            _ => Err(CoreError::InvalidNotificationKind {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
