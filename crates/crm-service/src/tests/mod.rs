mod deals;
mod reports;

use crate::{CrmDataset, CrmService, FaultInjector, LatencyProfile};

/// Seeded service without latency or fault injection.
pub(crate) fn service() -> CrmService {
    CrmService::seeded()
}

/// Service over an empty dataset.
pub(crate) fn empty_service() -> CrmService {
    CrmService::new(
        CrmDataset::empty(),
        LatencyProfile::instant(),
        FaultInjector::disabled(),
    )
}
