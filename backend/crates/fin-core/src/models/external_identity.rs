use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Identity assertion supplied by the authentication provider for one request.
///
/// Never persisted directly. The resolver maps it onto a [`crate::UserRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalIdentity {
    /// Stable id the provider assigns to the principal
    pub external_subject_id: String,
    /// Primary email at the time of the call
    pub email: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
}

impl ExternalIdentity {
    pub fn new(external_subject_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            external_subject_id: external_subject_id.into(),
            email: email.into(),
            display_name: None,
            avatar_url: None,
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }

    /// Structural check done before any store access.
    ///
    /// Email syntax is the provider's responsibility and is not re-checked here.
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.external_subject_id.trim().is_empty() {
            return Err(CoreError::Validation {
                message: "external_subject_id cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
