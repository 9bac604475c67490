use std::panic::Location;

use crm_service::ServiceError;
use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PanelError {
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Stage is locked: {id} {location}")]
    LockedStage { id: String, location: ErrorLocation },

    #[error("Unknown stage: {id} {location}")]
    UnknownStage { id: String, location: ErrorLocation },

    #[error("Service call failed: {source} {location}")]
    Service {
        #[source]
        source: ServiceError,
        location: ErrorLocation,
    },
}

impl PanelError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn locked_stage<S: Into<String>>(id: S) -> Self {
        Self::LockedStage {
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unknown_stage<S: Into<String>>(id: S) -> Self {
        Self::UnknownStage {
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ServiceError> for PanelError {
    #[track_caller]
    fn from(source: ServiceError) -> Self {
        Self::Service {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, PanelError>;
