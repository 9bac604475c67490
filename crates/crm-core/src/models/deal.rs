use crate::models::stage::{DEFAULT_STAGE_ID, StageId};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: String,
    pub contact_id: String,
    pub contact_name: String,

    pub title: String,
    /// Monetary value in the account currency.
    pub value: f64,

    /// The single stage this deal currently belongs to.
    pub stage: StageId,
    pub last_contact: NaiveDate,
}

impl Deal {
    /// New deal entering the pipeline at the default stage.
    pub fn new(
        contact_id: String,
        contact_name: String,
        title: String,
        value: f64,
        last_contact: NaiveDate,
    ) -> Self {
        Self {
            id: format!("d{}", Uuid::new_v4().simple()),
            contact_id,
            contact_name,
            title,
            value,
            stage: DEFAULT_STAGE_ID.to_string(),
            last_contact,
        }
    }
}
