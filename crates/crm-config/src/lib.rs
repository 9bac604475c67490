mod config;
mod error;
mod log_level;
mod logging_config;
mod service_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use service_config::ServiceConfig;

const DEFAULT_LATENCY_MS: u64 = 500;
const MAX_LATENCY_MS: u64 = 60_000;
const DEFAULT_REJECTION_RATE: f64 = 0.0;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
