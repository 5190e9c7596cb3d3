use crate::{MetricKind, MetricThresholds, MetricThresholdsUpdate, ThresholdBounds};

use googletest::prelude::*;

#[test]
fn given_defaults_when_looked_up_then_api_response_time_has_expected_bounds() {
    let thresholds = MetricThresholds::default();

    let bounds = thresholds.for_kind(MetricKind::ApiResponseTime).unwrap();

    assert_that!(bounds.warning_ms, eq(1000.0));
    assert_that!(bounds.critical_ms, eq(3000.0));
}

#[test]
fn given_defaults_when_looked_up_then_resource_usage_has_no_bounds() {
    let thresholds = MetricThresholds::default();

    assert_that!(thresholds.for_kind(MetricKind::ResourceUsage).is_none(), eq(true));
}

#[test]
fn given_update_when_merged_then_named_kind_is_replaced_and_others_kept() {
    let mut thresholds = MetricThresholds::default();
    let mut update = MetricThresholdsUpdate::default();
    update.bounds.insert(
        MetricKind::RenderTime,
        ThresholdBounds {
            warning_ms: 250.0,
            critical_ms: 900.0,
        },
    );

    thresholds.merge(update);

    assert_that!(
        thresholds.for_kind(MetricKind::RenderTime).unwrap().warning_ms,
        eq(250.0)
    );
    assert_that!(
        thresholds
            .for_kind(MetricKind::ApiResponseTime)
            .unwrap()
            .critical_ms,
        eq(3000.0)
    );
}

#[test]
fn given_thresholds_when_serialized_then_kinds_are_snake_case_keys() {
    let thresholds = MetricThresholds::default();

    let value = serde_json::to_value(&thresholds).unwrap();

    assert_that!(
        value["bounds"]["api_response_time"]["warning_ms"],
        eq(&serde_json::json!(1000.0))
    );
}
