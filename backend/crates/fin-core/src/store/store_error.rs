use crate::UniqueField;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failure reported by a [`crate::UserStore`] implementation
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Uniqueness violation on {field} {location}")]
    UniquenessViolation {
        field: UniqueField,
        location: ErrorLocation,
    },

    #[error("Store unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("Corrupt user record: {message} {location}")]
    Corrupt {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn uniqueness_violation(field: UniqueField) -> Self {
        StoreError::UniquenessViolation {
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        StoreError::Unavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn corrupt<S: Into<String>>(message: S) -> Self {
        StoreError::Corrupt {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
