use std::sync::atomic::{AtomicBool, Ordering};

/// Injectable rejection for write operations.
///
/// `rejection_rate` samples every write; `fail_next` forces exactly one
/// rejection and is the hook the revert-path tests use.
#[derive(Debug, Default)]
pub struct FaultInjector {
    rejection_rate: f64,
    fail_next: AtomicBool,
}

impl FaultInjector {
    pub fn new(rejection_rate: f64) -> Self {
        Self {
            rejection_rate,
            fail_next: AtomicBool::new(false),
        }
    }

    /// Never rejects.
    pub fn disabled() -> Self {
        Self::new(0.0)
    }

    /// Force the next write to be rejected.
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    /// Whether the write being processed should be rejected.
    pub fn should_reject(&self) -> bool {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return true;
        }

        self.rejection_rate > 0.0 && rand::random::<f64>() < self.rejection_rate
    }
}
