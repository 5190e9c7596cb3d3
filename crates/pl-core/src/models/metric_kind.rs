use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Category of a recorded performance metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    ApiResponseTime,
    PageLoadTime,
    FunctionExecutionTime,
    DatabaseQueryTime,
    RenderTime,
    ResourceUsage,
}

impl MetricKind {
    pub const ALL: [MetricKind; 6] = [
        MetricKind::ApiResponseTime,
        MetricKind::PageLoadTime,
        MetricKind::FunctionExecutionTime,
        MetricKind::DatabaseQueryTime,
        MetricKind::RenderTime,
        MetricKind::ResourceUsage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ApiResponseTime => "api_response_time",
            Self::PageLoadTime => "page_load_time",
            Self::FunctionExecutionTime => "function_execution_time",
            Self::DatabaseQueryTime => "database_query_time",
            Self::RenderTime => "render_time",
            Self::ResourceUsage => "resource_usage",
        }
    }
}

impl FromStr for MetricKind {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "api_response_time" => Ok(Self::ApiResponseTime),
            "page_load_time" => Ok(Self::PageLoadTime),
            "function_execution_time" => Ok(Self::FunctionExecutionTime),
            "database_query_time" => Ok(Self::DatabaseQueryTime),
            "render_time" => Ok(Self::RenderTime),
            "resource_usage" => Ok(Self::ResourceUsage),
            _ => Err(CoreError::InvalidMetricKind {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
