use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.service.latency_ms, eq(500));
    assert_that!(config.service.rejection_rate, eq(0.0));
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_ok_and_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
              [service]
              latency_ms = 50
              rejection_rate = 0.25

              [logging]
              level = "debug"
              colored = false
          "#,
    )
    .unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.service.latency_ms, eq(50));
    assert_that!(config.service.rejection_rate, eq(0.25));
    assert_that!(config.logging.colored, eq(false));
    assert_eq!(*config.logging.level, log::LevelFilter::Debug);
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[service]\nlatency_ms = 50\n").unwrap();
    let _latency = EnvGuard::set("CRM_SERVICE_LATENCY_MS", "5");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.service.latency_ms, eq(5));
}

#[test]
#[serial]
fn given_malformed_toml_when_load_then_toml_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[service\nlatency_ms = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert!(matches!(result, Err(crate::ConfigError::Toml { .. })));
}
