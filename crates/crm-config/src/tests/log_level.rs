use crate::LogLevel;

use std::str::FromStr;

use log::LevelFilter;

#[test]
fn given_known_level_strings_when_parsed_then_matching_filter() {
    assert_eq!(LogLevel::from_str("off").unwrap().0, LevelFilter::Off);
    assert_eq!(LogLevel::from_str("error").unwrap().0, LevelFilter::Error);
    assert_eq!(LogLevel::from_str("warn").unwrap().0, LevelFilter::Warn);
    assert_eq!(LogLevel::from_str("info").unwrap().0, LevelFilter::Info);
    assert_eq!(LogLevel::from_str("debug").unwrap().0, LevelFilter::Debug);
    assert_eq!(LogLevel::from_str("trace").unwrap().0, LevelFilter::Trace);
}

#[test]
fn given_mixed_case_level_when_parsed_then_case_insensitive() {
    assert_eq!(LogLevel::from_str("DEBUG").unwrap().0, LevelFilter::Debug);
    assert_eq!(LogLevel::from_str("Warn").unwrap().0, LevelFilter::Warn);
}

#[test]
fn given_unknown_level_when_parsed_then_defaults_to_info() {
    assert_eq!(LogLevel::from_str("verbose").unwrap().0, LevelFilter::Info);
}
