use crate::{
    EmailSettingsUpdate, NotificationKind, NotificationPriority, NotificationSettings,
    NotificationSettingsUpdate,
};

use googletest::prelude::*;

#[test]
fn given_defaults_when_inspected_then_email_is_off_and_toggles_are_on() {
    let settings = NotificationSettings::default();

    assert_that!(settings.email.enabled, eq(false));
    assert_that!(
        settings.email.min_priority,
        eq(NotificationPriority::High)
    );
    for kind in [
        NotificationKind::ErrorAlert,
        NotificationKind::SecurityAlert,
        NotificationKind::ThresholdAlert,
        NotificationKind::SystemEvent,
    ] {
        assert_that!(settings.kind_enabled(kind), eq(true));
    }
}

#[test]
fn given_partial_update_when_merged_then_only_named_fields_change() {
    let mut settings = NotificationSettings::default();
    let update = NotificationSettingsUpdate {
        email: Some(EmailSettingsUpdate {
            enabled: Some(true),
            recipients: Some(vec!["ops@prepline.io".into()]),
            min_priority: None,
        }),
        system_events: Some(false),
        ..NotificationSettingsUpdate::default()
    };

    settings.merge(update);

    assert_that!(settings.email.enabled, eq(true));
    assert_eq!(settings.email.recipients, vec!["ops@prepline.io".to_string()]);
    // min_priority untouched by the partial update
    assert_that!(settings.email.min_priority, eq(NotificationPriority::High));
    assert_that!(settings.system_events, eq(false));
    assert_that!(settings.error_alerts, eq(true));
}

#[test]
fn given_empty_settings_json_when_deserialized_then_defaults_apply() {
    let settings: NotificationSettings = serde_json::from_str("{}").unwrap();

    assert_eq!(settings, NotificationSettings::default());
}

#[test]
fn given_priority_order_when_compared_then_critical_is_highest() {
    assert!(NotificationPriority::Low < NotificationPriority::Medium);
    assert!(NotificationPriority::Medium < NotificationPriority::High);
    assert!(NotificationPriority::High < NotificationPriority::Critical);
    assert_that!(NotificationPriority::Critical.ordinal(), eq(4));
    assert_that!(NotificationPriority::Low.ordinal(), eq(1));
}
