use serde::{Deserialize, Serialize};

/// Conversation inbox of the embedding support-ticketing host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inbox {
    pub id: u32,
    pub name: String,
}
