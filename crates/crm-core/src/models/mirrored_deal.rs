use crate::models::deal::Deal;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Report-facing projection of a deal that entered a mirrored stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MirroredDeal {
    pub id: String,
    pub title: String,
    pub contact_name: String,
    pub value: f64,
    pub moved_at: DateTime<Utc>,
}

impl MirroredDeal {
    /// Snapshot of `deal` at the moment it entered a mirrored stage.
    pub fn of(deal: &Deal, moved_at: DateTime<Utc>) -> Self {
        Self {
            id: deal.id.clone(),
            title: deal.title.clone(),
            contact_name: deal.contact_name.clone(),
            value: deal.value,
            moved_at,
        }
    }
}
