use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Uniquely indexed column of the user store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UniqueField {
    ExternalSubjectId,
    Email,
}

impl UniqueField {
    /// Column name in the `users` table
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExternalSubjectId => "external_subject_id",
            Self::Email => "email",
        }
    }
}

impl FromStr for UniqueField {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "external_subject_id" => Ok(Self::ExternalSubjectId),
            "email" => Ok(Self::Email),
            _ => Err(CoreError::InvalidUniqueField {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for UniqueField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
