use crate::models::activity::Activity;
use crate::models::agent_status::AgentStatus;
use crate::models::chat_message::ChatMessage;
use crate::models::contact::Contact;
use crate::models::deal::Deal;

use serde::{Deserialize, Serialize};

/// Everything the contact detail panel renders for one contact.
/// Contacts created through lead intake have no agent status yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactBundle {
    pub contact: Contact,
    pub deals: Vec<Deal>,
    pub activities: Vec<Activity>,
    pub agent_status: Option<AgentStatus>,
    pub chat_messages: Vec<ChatMessage>,
}
