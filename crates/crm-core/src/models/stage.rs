use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a pipeline stage. Seeded stages carry fixed semantic ids
/// (`lead`, `won`, ...); user-created stages get a generated id.
pub type StageId = String;

/// The three terminal/branch stages that mirror into the report tables,
/// in the fixed relative order they render in after all movable stages.
pub const LOCKED_STAGE_IDS: [&str; 3] = ["marketing", "won", "lost"];

/// Stage that newly intaken leads and orphaned deals land in.
pub const DEFAULT_STAGE_ID: &str = "lead";

/// Colors available to user-created stages.
pub const STAGE_COLOR_PALETTE: [&str; 4] =
    ["bg-pink-500", "bg-indigo-500", "bg-teal-500", "bg-gray-500"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    pub id: StageId,
    pub title: String,
    /// Color token resolved by the embedding host's stylesheet.
    pub color: String,
    pub locked: bool,
}

impl Stage {
    pub fn new(title: String, color: String) -> Self {
        Self {
            id: format!("stage-{}", Uuid::new_v4()),
            title,
            color,
            locked: false,
        }
    }

    pub fn is_locked_id(id: &str) -> bool {
        LOCKED_STAGE_IDS.contains(&id)
    }
}

/// The six-entry seed list served by the data service at startup.
pub fn default_stages() -> Vec<Stage> {
    [
        ("lead", "Lead", "bg-blue-500", false),
        ("qualified", "Qualificado", "bg-purple-500", false),
        ("proposal", "Proposta", "bg-yellow-500", false),
        ("marketing", "Voltar ao Marketing", "bg-pink-500", true),
        ("won", "Ganho (Virou cliente)", "bg-green-500", true),
        ("lost", "Perdido", "bg-red-500", true),
    ]
    .into_iter()
    .map(|(id, title, color, locked)| Stage {
        id: id.to_string(),
        title: title.to_string(),
        color: color.to_string(),
        locked,
    })
    .collect()
}
