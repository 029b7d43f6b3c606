use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Authentication provider unavailable: {message} {location}")]
    ProviderUnavailable {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn invalid_claim<S: Into<String>>(claim: &str, message: S) -> Self {
        AuthError::InvalidClaim {
            claim: claim.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn provider_unavailable<S: Into<String>>(message: S) -> Self {
        AuthError::ProviderUnavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
            Self::ProviderUnavailable { .. } => "AUTH_PROVIDER_UNAVAILABLE",
        }
    }

    pub fn field(&self) -> Option<String> {
        match self {
            Self::InvalidClaim { claim, .. } => Some(claim.clone()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
