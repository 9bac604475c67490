use serde::{Deserialize, Serialize};

/// Account-wide tag definition. Contacts reference tags by title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountTag {
    pub title: String,
    /// Hex color, e.g. `#fe6500`.
    pub color: String,
}

impl AccountTag {
    pub fn new(title: String, color: String) -> Self {
        Self { title, color }
    }
}
