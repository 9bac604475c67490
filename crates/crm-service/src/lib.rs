pub mod dataset;
pub mod error;
pub mod fault;
pub mod latency;
pub mod service;

mod mirror;

pub use dataset::CrmDataset;
pub use error::{Result, ServiceError};
pub use fault::FaultInjector;
pub use latency::LatencyProfile;
pub use service::CrmService;

#[cfg(test)]
mod tests;
