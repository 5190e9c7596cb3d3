use crate::RateLimitConfig;

#[test]
fn given_defaults_when_validated_then_passes() {
    assert!(RateLimitConfig::default().validate().is_ok());
}

#[test]
fn given_zero_max_requests_when_validated_then_rejected() {
    let config = RateLimitConfig {
        max_requests: 0,
        window_secs: 60,
    };
    assert!(config.validate().is_err());
}

#[test]
fn given_oversized_window_when_validated_then_rejected() {
    let config = RateLimitConfig {
        max_requests: 60,
        window_secs: 7200,
    };
    assert!(config.validate().is_err());
}
