mod activity_type;
mod agent_state;
mod stage;
