use crate::models::agent_state::AgentState;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Last-known status of the AI agent working a contact's conversations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentStatus {
    pub state: AgentState,
    pub last_activity: NaiveDateTime,
    pub summary: String,
}
