use crate::Config;

use googletest::prelude::*;
use serial_test::serial;

fn clear_env() {
    for key in [
        "PL_CONFIG_DIR",
        "PL_SERVER_HOST",
        "PL_SERVER_PORT",
        "PL_DATABASE_PATH",
        "PL_LOG_LEVEL",
        "PL_RATE_LIMIT_MAX_REQUESTS",
        "PL_RATE_LIMIT_WINDOW_SECS",
        "PL_EMAIL_ENDPOINT",
        "PL_EMAIL_API_KEY",
        "PL_SWEEP_INTERVAL_SECS",
    ] {
        unsafe { std::env::remove_var(key) };
    }
}

#[test]
#[serial]
fn given_no_config_file_when_loaded_then_defaults_apply_and_validate() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    unsafe { std::env::set_var("PL_CONFIG_DIR", dir.path()) };

    let config = Config::load().unwrap();

    assert_that!(config.server.port, eq(8000));
    assert_that!(config.rate_limit.max_requests, eq(60));
    assert_that!(config.rate_limit.window_secs, eq(60));
    assert_that!(config.sweep.enabled, eq(true));
    assert!(config.validate().is_ok());
    clear_env();
}

#[test]
#[serial]
fn given_config_file_when_loaded_then_values_override_defaults() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        r#"
[server]
port = 9021

[rate_limit]
max_requests = 120

[email]
endpoint = "https://mail.prepline.io/send"
"#,
    )
    .unwrap();
    unsafe { std::env::set_var("PL_CONFIG_DIR", dir.path()) };

    let config = Config::load().unwrap();

    assert_that!(config.server.port, eq(9021));
    assert_that!(config.rate_limit.max_requests, eq(120));
    assert_eq!(
        config.email.endpoint.as_deref(),
        Some("https://mail.prepline.io/send")
    );
    // Untouched sections keep defaults
    assert_that!(config.sweep.interval_secs, eq(3600));
    clear_env();
}

#[test]
#[serial]
fn given_env_overrides_when_loaded_then_they_win_over_the_file() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[server]\nport = 9021\n",
    )
    .unwrap();
    unsafe {
        std::env::set_var("PL_CONFIG_DIR", dir.path());
        std::env::set_var("PL_SERVER_PORT", "9400");
        std::env::set_var("PL_RATE_LIMIT_MAX_REQUESTS", "5");
    }

    let config = Config::load().unwrap();

    assert_that!(config.server.port, eq(9400));
    assert_that!(config.rate_limit.max_requests, eq(5));
    clear_env();
}

#[test]
#[serial]
fn given_escaping_database_path_when_validated_then_rejected() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    unsafe { std::env::set_var("PL_CONFIG_DIR", dir.path()) };

    let mut config = Config::load().unwrap();
    config.database.path = "../outside.db".into();

    assert!(config.validate().is_err());
    clear_env();
}

#[test]
#[serial]
fn given_malformed_toml_when_loaded_then_error_names_the_file() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "server = not valid {").unwrap();
    unsafe { std::env::set_var("PL_CONFIG_DIR", dir.path()) };

    let result = Config::load();

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("config.toml"));
    clear_env();
}
