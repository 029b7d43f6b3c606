use crate::{AuthError, Result as AuthErrorResult};

use fin_core::ExternalIdentity;

use serde::{Deserialize, Serialize};

const MAX_SUBJECT_LENGTH: usize = 255;

/// Claims about the signed-in principal, as handed over by the provider.
///
/// Signature and expiry checks happen inside the provider SDK; by the time a
/// value of this type exists it is trusted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderClaims {
    /// Subject (provider user id)
    pub sub: String,
    /// Addresses on file, primary first
    #[serde(default)]
    pub email_addresses: Vec<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl ProviderClaims {
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.trim().is_empty() {
            return Err(AuthError::invalid_claim("sub", "sub cannot be empty"));
        }
        if self.sub.len() > MAX_SUBJECT_LENGTH {
            return Err(AuthError::invalid_claim("sub", "sub exceeds maximum length"));
        }

        if self.primary_email().is_none() {
            return Err(AuthError::invalid_claim(
                "email_addresses",
                "at least one email address is required",
            ));
        }

        Ok(())
    }

    pub fn primary_email(&self) -> Option<&str> {
        self.email_addresses
            .first()
            .map(String::as_str)
            .filter(|email| !email.trim().is_empty())
    }

    /// "First Last", skipping whichever part is missing
    pub fn display_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    #[track_caller]
    pub fn to_identity(&self) -> AuthErrorResult<ExternalIdentity> {
        self.validate()?;

        let email = self.primary_email().ok_or_else(|| {
            AuthError::invalid_claim("email_addresses", "at least one email address is required")
        })?;

        Ok(ExternalIdentity {
            external_subject_id: self.sub.clone(),
            email: email.to_string(),
            display_name: self.display_name(),
            avatar_url: self.image_url.clone(),
        })
    }
}
