use crate::ServiceConfig;

#[test]
fn given_default_service_config_when_validated_then_ok() {
    let config = ServiceConfig::default();
    assert!(config.validate().is_ok());
}

#[test]
fn given_excessive_latency_when_validated_then_error() {
    let config = ServiceConfig {
        latency_ms: 120_000,
        ..ServiceConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn given_rejection_rate_out_of_range_when_validated_then_error() {
    let too_high = ServiceConfig {
        rejection_rate: 1.5,
        ..ServiceConfig::default()
    };
    assert!(too_high.validate().is_err());

    let negative = ServiceConfig {
        rejection_rate: -0.1,
        ..ServiceConfig::default()
    };
    assert!(negative.validate().is_err());
}

#[test]
fn given_boundary_rejection_rates_when_validated_then_ok() {
    for rate in [0.0, 0.5, 1.0] {
        let config = ServiceConfig {
            rejection_rate: rate,
            ..ServiceConfig::default()
        };
        assert!(config.validate().is_ok(), "rate {rate} should be valid");
    }
}
