use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid activity type: {value} {location}")]
    InvalidActivityType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid agent state: {value} {location}")]
    InvalidAgentState {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid message author: {value} {location}")]
    InvalidMessageAuthor {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
