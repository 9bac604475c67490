use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{entity} not found: {id} {location}")]
    NotFound {
        entity: &'static str,
        id: String,
        location: ErrorLocation,
    },

    #[error("{entity} already exists: {title} {location}")]
    AlreadyExists {
        entity: &'static str,
        title: String,
        location: ErrorLocation,
    },

    #[error("Service rejected {operation} {location}")]
    Rejected {
        operation: &'static str,
        location: ErrorLocation,
    },
}

impl ServiceError {
    #[track_caller]
    pub fn not_found<S: Into<String>>(entity: &'static str, id: S) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn already_exists<S: Into<String>>(entity: &'static str, title: S) -> Self {
        Self::AlreadyExists {
            entity,
            title: title.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rejected(operation: &'static str) -> Self {
        Self::Rejected {
            operation,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
