use crate::models::activity_type::ActivityType;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub contact_id: String,
    pub activity_type: ActivityType,
    pub title: String,
    pub due_date: NaiveDate,
    pub completed: bool,
}
