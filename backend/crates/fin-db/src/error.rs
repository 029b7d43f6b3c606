use fin_core::{StoreError, UniqueField};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unique constraint failed on users.{field} {location}")]
    UniqueViolation {
        field: UniqueField,
        location: ErrorLocation,
    },

    #[error("Row decode failed: {message} {location}")]
    RowDecode {
        message: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for StoreError {
    #[track_caller]
    fn from(error: DbError) -> Self {
        match error {
            DbError::UniqueViolation { field, .. } => StoreError::uniqueness_violation(field),
            DbError::RowDecode { message, .. } => StoreError::corrupt(message),
            other => StoreError::unavailable(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
