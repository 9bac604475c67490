use crate::AgentState;

use std::str::FromStr;

#[test]
fn test_agent_state_as_str() {
    assert_eq!(AgentState::Idle.as_str(), "idle");
    assert_eq!(AgentState::Active.as_str(), "active");
    assert_eq!(AgentState::Processing.as_str(), "processing");
}

#[test]
fn test_agent_state_from_str() {
    assert_eq!(AgentState::from_str("active").unwrap(), AgentState::Active);
    assert_eq!(
        AgentState::from_str("processing").unwrap(),
        AgentState::Processing
    );
    assert!(AgentState::from_str("sleeping").is_err());
}

#[test]
fn test_agent_state_default() {
    assert_eq!(AgentState::default(), AgentState::Idle);
}
