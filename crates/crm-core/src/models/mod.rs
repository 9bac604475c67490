pub mod account_tag;
pub mod activity;
pub mod activity_type;
pub mod agent_state;
pub mod agent_status;
pub mod chat_message;
pub mod contact;
pub mod contact_bundle;
pub mod dashboard;
pub mod deal;
pub mod inbox;
pub mod mirrored_deal;
pub mod new_lead;
pub mod report;
pub mod stage;
