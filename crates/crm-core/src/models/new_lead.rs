use serde::{Deserialize, Serialize};

/// Lead intake payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLeadRequest {
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub value: Option<f64>,
    pub inbox_id: u32,
    pub start_conversation: bool,
}

/// Identifiers handed back after a successful lead intake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLeadReceipt {
    pub contact_id: String,
    pub deal_id: String,
    /// Contact reference assigned by the embedding ticketing host.
    pub ticket_contact_ref: u32,
    /// Present when the intake also opened a conversation.
    pub conversation_id: Option<u32>,
}

/// Result of probing for an existing contact before intake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicateCheck {
    pub is_duplicate: bool,
    pub contact_id: Option<String>,
}
