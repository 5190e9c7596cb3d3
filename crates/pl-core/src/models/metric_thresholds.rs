use crate::models::metric_kind::MetricKind;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Warning/critical bounds for one metric kind, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdBounds {
    pub warning_ms: f64,
    pub critical_ms: f64,
}

/// Per-kind performance thresholds.
///
/// Kinds with no entry are never flagged. Singleton settings record with
/// the same load/merge/persist discipline as the retention policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricThresholds {
    pub bounds: HashMap<MetricKind, ThresholdBounds>,
}

impl Default for MetricThresholds {
    fn default() -> Self {
        let mut bounds = HashMap::new();
        bounds.insert(
            MetricKind::ApiResponseTime,
            ThresholdBounds {
                warning_ms: 1000.0,
                critical_ms: 3000.0,
            },
        );
        bounds.insert(
            MetricKind::PageLoadTime,
            ThresholdBounds {
                warning_ms: 2000.0,
                critical_ms: 5000.0,
            },
        );
        bounds.insert(
            MetricKind::FunctionExecutionTime,
            ThresholdBounds {
                warning_ms: 1000.0,
                critical_ms: 5000.0,
            },
        );
        bounds.insert(
            MetricKind::DatabaseQueryTime,
            ThresholdBounds {
                warning_ms: 500.0,
                critical_ms: 2000.0,
            },
        );
        bounds.insert(
            MetricKind::RenderTime,
            ThresholdBounds {
                warning_ms: 500.0,
                critical_ms: 1500.0,
            },
        );
        Self { bounds }
    }
}

impl MetricThresholds {
    pub fn for_kind(&self, kind: MetricKind) -> Option<ThresholdBounds> {
        self.bounds.get(&kind).copied()
    }

    /// Merge a partial update; each supplied kind replaces its entry.
    pub fn merge(&mut self, update: MetricThresholdsUpdate) {
        for (kind, bounds) in update.bounds {
            self.bounds.insert(kind, bounds);
        }
    }
}

/// Partial thresholds update from the admin surface
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricThresholdsUpdate {
    pub bounds: HashMap<MetricKind, ThresholdBounds>,
}
