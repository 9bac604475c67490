pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::account_tag::AccountTag;
pub use models::activity::Activity;
pub use models::activity_type::ActivityType;
pub use models::agent_state::AgentState;
pub use models::agent_status::AgentStatus;
pub use models::chat_message::{ChatMessage, MessageAuthor};
pub use models::contact::Contact;
pub use models::contact_bundle::ContactBundle;
pub use models::dashboard::{DailyPerformance, DashboardMetrics};
pub use models::deal::Deal;
pub use models::inbox::Inbox;
pub use models::mirrored_deal::MirroredDeal;
pub use models::new_lead::{DuplicateCheck, NewLeadReceipt, NewLeadRequest};
pub use models::report::{MirrorTotals, ReportTotals};
pub use models::stage::{
    DEFAULT_STAGE_ID, LOCKED_STAGE_IDS, STAGE_COLOR_PALETTE, Stage, StageId, default_stages,
};

#[cfg(test)]
mod tests;
