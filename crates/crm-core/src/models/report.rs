use serde::{Deserialize, Serialize};

/// Count and value sum over one mirror table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct MirrorTotals {
    pub count: usize,
    pub total_value: f64,
}

/// Totals over the three mirror tables, as shown in the reports view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ReportTotals {
    pub marketing_return: MirrorTotals,
    pub won: MirrorTotals,
    pub lost: MirrorTotals,
}
