use crate::{NewUser, StoreResult, UserRecord};

use std::sync::Arc;

use async_trait::async_trait;

/// Persistent user store keyed by external subject id and by email.
///
/// Implementations must make `insert` atomic and enforce uniqueness of both
/// `external_subject_id` (when present) and `email`, reporting a rejected
/// write as [`crate::StoreError::UniquenessViolation`].
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_external_subject_id(
        &self,
        external_subject_id: &str,
    ) -> StoreResult<Option<UserRecord>>;

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<UserRecord>>;

    /// Insert a new record, assigning its `id` and `created_at`
    async fn insert(&self, new_user: &NewUser) -> StoreResult<UserRecord>;
}

#[async_trait]
impl<T: UserStore + ?Sized> UserStore for Arc<T> {
    async fn find_by_external_subject_id(
        &self,
        external_subject_id: &str,
    ) -> StoreResult<Option<UserRecord>> {
        (**self).find_by_external_subject_id(external_subject_id).await
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<UserRecord>> {
        (**self).find_by_email(email).await
    }

    async fn insert(&self, new_user: &NewUser) -> StoreResult<UserRecord> {
        (**self).insert(new_user).await
    }
}
