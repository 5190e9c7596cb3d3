use crate::{LogContext, LogEntry, LogLevel};

use googletest::prelude::*;
use serde_json::{Map, Value, json};

#[test]
fn given_entry_with_no_optional_fields_when_serialized_then_omits_unset_keys() {
    // Given: An entry constructed without any optional field
    let entry = LogEntry::new(LogLevel::Info, "request completed");

    // When: Serializing to JSON
    let value = serde_json::to_value(&entry).unwrap();
    let object = value.as_object().unwrap();

    // Then: No null placeholders appear in the record
    for key in [
        "user_id",
        "user_email",
        "path",
        "ip",
        "user_agent",
        "metadata",
        "stack",
    ] {
        assert_that!(object.contains_key(key), eq(false));
    }
    assert_that!(object.contains_key("message"), eq(true));
    assert_that!(object.contains_key("timestamp"), eq(true));
}

#[test]
fn given_entry_with_context_when_serialized_then_set_fields_are_present() {
    let mut metadata = Map::new();
    metadata.insert("attempt_count".into(), json!(3));

    let ctx = LogContext {
        user_id: Some("user-81".into()),
        user_email: None,
        path: Some("/api/v1/tests".into()),
        ip: Some("203.0.113.9".into()),
        user_agent: None,
        metadata: Some(metadata),
    };
    let entry = LogEntry::new(LogLevel::Security, "unauthorized access").with_context(ctx);

    let value = serde_json::to_value(&entry).unwrap();
    let object = value.as_object().unwrap();

    assert_that!(object["user_id"], eq(&Value::String("user-81".into())));
    assert_that!(object["path"], eq(&Value::String("/api/v1/tests".into())));
    assert_that!(object.contains_key("user_email"), eq(false));
    assert_that!(object.contains_key("user_agent"), eq(false));
    assert_that!(object["metadata"]["attempt_count"], eq(&json!(3)));
}

#[test]
fn given_serialized_entry_when_deserialized_then_round_trips() {
    let entry = LogEntry::new(LogLevel::Error, "scoring failed").with_stack("at api/scoring.rs:42");

    let text = serde_json::to_string(&entry).unwrap();
    let back: LogEntry = serde_json::from_str(&text).unwrap();

    assert_that!(back.id, eq(entry.id));
    assert_that!(back.level, eq(LogLevel::Error));
    assert_eq!(back.stack, entry.stack);
    assert_eq!(back.user_id, None);
}
