use serde::{Deserialize, Serialize};

/// One day of the dashboard performance series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPerformance {
    pub day: String,
    pub leads: u32,
    pub deals: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    /// Contacts currently tagged `Lead`.
    pub lead_count: usize,
    /// Deals in neither `won` nor `lost`.
    pub active_deals: usize,
    /// Percentage of all deals that are won, rounded to the nearest integer.
    pub conversion_rate: u32,
    pub open_tickets: u32,
    pub weekly_performance: Vec<DailyPerformance>,
}
