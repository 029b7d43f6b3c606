use crate::NewUser;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Uuid,
    /// `None` for users provisioned before they ever signed in
    pub external_subject_id: Option<String>,
    pub email: String,

    // Profile
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,

    // Audit
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Materializes an insert payload with a fresh id.
    ///
    /// `created_at` is truncated to whole seconds, the precision the store keeps.
    pub fn from_new_user(new_user: &NewUser) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            external_subject_id: new_user.external_subject_id.clone(),
            email: new_user.email.clone(),
            display_name: new_user.display_name.clone(),
            avatar_url: new_user.avatar_url.clone(),
            created_at: DateTime::from_timestamp(now.timestamp(), 0).unwrap_or(now),
        }
    }
}
