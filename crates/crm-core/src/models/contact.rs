use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,

    /// Titles of account tags attached to this contact.
    pub tags: Vec<String>,
    pub status: String,
    pub avatar_url: String,

    /// Whether the AI agent handles this contact's conversations.
    pub ai_assist: bool,
}

impl Contact {
    /// New contact entering through lead intake.
    pub fn new_lead(name: String, email: String, phone: String) -> Self {
        let avatar_url = format!("https://picsum.photos/seed/{name}/100/100");
        Self {
            id: format!("c{}", Uuid::new_v4().simple()),
            name,
            email,
            phone,
            tags: vec!["Lead".to_string()],
            status: "Novo".to_string(),
            avatar_url,
            ai_assist: false,
        }
    }
}
