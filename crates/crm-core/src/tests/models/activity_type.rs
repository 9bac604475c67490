use crate::ActivityType;

use std::str::FromStr;

#[test]
fn test_activity_type_as_str() {
    assert_eq!(ActivityType::Task.as_str(), "task");
    assert_eq!(ActivityType::Call.as_str(), "call");
    assert_eq!(ActivityType::Meeting.as_str(), "meeting");
    assert_eq!(ActivityType::Note.as_str(), "note");
}

#[test]
fn test_activity_type_from_str() {
    assert_eq!(
        ActivityType::from_str("meeting").unwrap(),
        ActivityType::Meeting
    );
    assert_eq!(ActivityType::from_str("note").unwrap(), ActivityType::Note);
    assert!(ActivityType::from_str("invalid").is_err());
}

#[test]
fn test_activity_type_default() {
    assert_eq!(ActivityType::default(), ActivityType::Task);
}
