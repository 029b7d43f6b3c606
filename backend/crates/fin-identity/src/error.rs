use fin_auth::AuthError;
use fin_core::{CoreError, StoreError};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    /// Malformed assertion from the auth collaborator; rejected before any store access
    #[error("Invalid identity: {message} {location}")]
    InvalidIdentity {
        message: String,
        location: ErrorLocation,
    },

    /// Transient infrastructure failure; safe for the caller to retry the request
    #[error("User store unavailable: {message} {location}")]
    StoreUnavailable {
        message: String,
        location: ErrorLocation,
    },

    /// Two identities contending for one unique slot; needs operator attention
    #[error("Identity conflict: {message} {location}")]
    IdentityConflict {
        message: String,
        location: ErrorLocation,
    },

    /// The auth collaborator itself failed; the caller is not known to be signed out
    #[error("Authentication provider error: {source} {location}")]
    Auth {
        #[source]
        source: AuthError,
        location: ErrorLocation,
    },
}

impl ResolveError {
    #[track_caller]
    pub fn identity_conflict<S: Into<String>>(message: S) -> Self {
        ResolveError::IdentityConflict {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Only store outages are worth retrying; everything else fails the same way again
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::StoreUnavailable { .. })
    }

    /// Stable code for the rendering layer's error state
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidIdentity { .. } => "INVALID_IDENTITY",
            Self::StoreUnavailable { .. } => "STORE_UNAVAILABLE",
            Self::IdentityConflict { .. } => "IDENTITY_CONFLICT",
            Self::Auth { .. } => "AUTH_FAILED",
        }
    }
}

impl From<CoreError> for ResolveError {
    #[track_caller]
    fn from(error: CoreError) -> Self {
        let message = match error {
            CoreError::Validation { message, .. } => message,
            other => other.to_string(),
        };

        ResolveError::InvalidIdentity {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StoreError> for ResolveError {
    #[track_caller]
    fn from(error: StoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match error {
            StoreError::UniquenessViolation { field, .. } => ResolveError::IdentityConflict {
                message: format!("unexpected uniqueness violation on {}", field),
                location,
            },
            StoreError::Unavailable { message, .. } => {
                ResolveError::StoreUnavailable { message, location }
            }
            StoreError::Corrupt { message, .. } => ResolveError::StoreUnavailable {
                message: format!("corrupt user record: {}", message),
                location,
            },
        }
    }
}

impl From<AuthError> for ResolveError {
    #[track_caller]
    fn from(source: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match source {
            // Malformed claims are a bad assertion, not an auth outage
            AuthError::InvalidClaim { claim, message, .. } => ResolveError::InvalidIdentity {
                message: format!("{}: {}", claim, message),
                location,
            },
            source => ResolveError::Auth { source, location },
        }
    }
}

pub type Result<T> = std::result::Result<T, ResolveError>;
