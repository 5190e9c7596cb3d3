use crate::{LogLevel, Retention, RetentionPolicy, RetentionPolicyUpdate};

use googletest::prelude::*;

#[test]
fn given_policy_json_when_deserialized_then_accepts_days_and_forever() {
    let policy: RetentionPolicy =
        serde_json::from_str(r#"{"info":14,"warning":30,"error":90,"security":"forever"}"#)
            .unwrap();

    assert_that!(policy.info, eq(Retention::Days(14)));
    assert_that!(policy.security, eq(Retention::Forever));
}

#[test]
fn given_policy_when_serialized_then_forever_is_a_string_and_days_a_number() {
    let policy = RetentionPolicy {
        info: Retention::Days(7),
        security: Retention::Forever,
        ..RetentionPolicy::default()
    };

    let value = serde_json::to_value(policy).unwrap();

    assert_that!(value["info"], eq(&serde_json::json!(7)));
    assert_that!(value["security"], eq(&serde_json::json!("forever")));
}

#[test]
fn given_partial_update_when_merged_then_unset_levels_keep_current_value() {
    let mut policy = RetentionPolicy::default();
    let update = RetentionPolicyUpdate {
        error: Some(Retention::Days(30)),
        ..RetentionPolicyUpdate::default()
    };

    policy.merge(update);

    assert_that!(policy.error, eq(Retention::Days(30)));
    assert_that!(policy.info, eq(RetentionPolicy::default().info));
    assert_that!(policy.security, eq(Retention::Forever));
}

#[test]
fn given_policy_when_looked_up_by_level_then_returns_matching_retention() {
    let policy = RetentionPolicy::default();

    assert_that!(policy.for_level(LogLevel::Error), eq(policy.error));
    assert_that!(policy.for_level(LogLevel::Security), eq(Retention::Forever));
}

#[test]
fn given_partial_json_when_deserialized_then_missing_levels_default() {
    // Admin PUT bodies may name only the levels being changed
    let update: RetentionPolicyUpdate = serde_json::from_str(r#"{"warning":45}"#).unwrap();

    assert_that!(update.warning, eq(Some(Retention::Days(45))));
    assert_that!(update.info, eq(None));
}
