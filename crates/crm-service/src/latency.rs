use std::time::Duration;

use tokio::time::sleep;

/// Simulated backend latency for the mock service.
///
/// Bulk fetches and intake writes pause for the full base duration;
/// small collection reads and the stage write pause for half of it.
#[derive(Debug, Clone, Copy)]
pub struct LatencyProfile {
    base: Duration,
}

impl LatencyProfile {
    pub fn new(base: Duration) -> Self {
        Self { base }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    /// No simulated latency. Used by tests and headless runs.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    pub async fn pause(&self) {
        if !self.base.is_zero() {
            sleep(self.base).await;
        }
    }

    pub async fn pause_short(&self) {
        if !self.base.is_zero() {
            sleep(self.base / 2).await;
        }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::from_millis(500)
    }
}
