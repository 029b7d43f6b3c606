use crate::ExternalIdentity;

use serde::{Deserialize, Serialize};

/// Insert payload for the user store. The store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub external_subject_id: Option<String>,
    pub email: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
}

impl NewUser {
    pub fn from_identity(identity: &ExternalIdentity) -> Self {
        Self {
            external_subject_id: Some(identity.external_subject_id.clone()),
            email: identity.email.clone(),
            display_name: identity.display_name.clone(),
            avatar_url: identity.avatar_url.clone(),
        }
    }

    /// A user provisioned through another onboarding path, with no provider link yet
    pub fn provisioned(email: impl Into<String>) -> Self {
        Self {
            external_subject_id: None,
            email: email.into(),
            display_name: None,
            avatar_url: None,
        }
    }
}
