use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LATENCY_MS, DEFAULT_REJECTION_RATE, MAX_LATENCY_MS,
};

use serde::Deserialize;

/// Knobs for the mock data service's backend simulation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Base latency applied to service calls, in milliseconds.
    /// Small reads pause for half of this.
    pub latency_ms: u64,
    /// Probability in [0, 1] that a write is rejected to exercise the
    /// revert path. 0 disables sampling.
    pub rejection_rate: f64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            latency_ms: DEFAULT_LATENCY_MS,
            rejection_rate: DEFAULT_REJECTION_RATE,
        }
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.latency_ms > MAX_LATENCY_MS {
            return Err(ConfigError::service(format!(
                "service.latency_ms must be <= {}, got {}",
                MAX_LATENCY_MS, self.latency_ms
            )));
        }

        if !(0.0..=1.0).contains(&self.rejection_rate) {
            return Err(ConfigError::service(format!(
                "service.rejection_rate must be 0.0-1.0, got {}",
                self.rejection_rate
            )));
        }

        Ok(())
    }
}
