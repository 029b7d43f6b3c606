use crate::InMemoryUserStore;

use fin_auth::{AuthError, PrincipalSource};
use fin_core::{
    ExternalIdentity, NewUser, StoreError, StoreResult, UniqueField, UserRecord, UserStore,
};

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Barrier;

/// Counts every call reaching the wrapped store
pub(crate) struct CountingStore<S> {
    pub(crate) inner: S,
    finds: AtomicUsize,
    inserts: AtomicUsize,
}

impl<S> CountingStore<S> {
    pub(crate) fn new(inner: S) -> Self {
        Self {
            inner,
            finds: AtomicUsize::new(0),
            inserts: AtomicUsize::new(0),
        }
    }

    pub(crate) fn finds(&self) -> usize {
        self.finds.load(Ordering::SeqCst)
    }

    pub(crate) fn inserts(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    pub(crate) fn accesses(&self) -> usize {
        self.finds() + self.inserts()
    }
}

#[async_trait]
impl<S: UserStore> UserStore for CountingStore<S> {
    async fn find_by_external_subject_id(
        &self,
        external_subject_id: &str,
    ) -> StoreResult<Option<UserRecord>> {
        self.finds.fetch_add(1, Ordering::SeqCst);
        self.inner
            .find_by_external_subject_id(external_subject_id)
            .await
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<UserRecord>> {
        self.finds.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_email(email).await
    }

    async fn insert(&self, new_user: &NewUser) -> StoreResult<UserRecord> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        self.inner.insert(new_user).await
    }
}

/// Holds every insert until `contenders` callers have reached it, so all of
/// them pass their lookups before anyone writes.
pub(crate) struct RacingStore {
    pub(crate) inner: InMemoryUserStore,
    barrier: Barrier,
    rejected: AtomicUsize,
}

impl RacingStore {
    pub(crate) fn new(contenders: usize) -> Self {
        Self {
            inner: InMemoryUserStore::new(),
            barrier: Barrier::new(contenders),
            rejected: AtomicUsize::new(0),
        }
    }

    pub(crate) fn rejected(&self) -> usize {
        self.rejected.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserStore for RacingStore {
    async fn find_by_external_subject_id(
        &self,
        external_subject_id: &str,
    ) -> StoreResult<Option<UserRecord>> {
        self.inner
            .find_by_external_subject_id(external_subject_id)
            .await
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<UserRecord>> {
        self.inner.find_by_email(email).await
    }

    async fn insert(&self, new_user: &NewUser) -> StoreResult<UserRecord> {
        self.barrier.wait().await;
        let result = self.inner.insert(new_user).await;
        if matches!(result, Err(StoreError::UniquenessViolation { .. })) {
            self.rejected.fetch_add(1, Ordering::SeqCst);
        }
        result
    }
}

/// Rejects every insert yet never shows a matching record
pub(crate) struct PhantomConflictStore;

#[async_trait]
impl UserStore for PhantomConflictStore {
    async fn find_by_external_subject_id(&self, _: &str) -> StoreResult<Option<UserRecord>> {
        Ok(None)
    }

    async fn find_by_email(&self, _: &str) -> StoreResult<Option<UserRecord>> {
        Ok(None)
    }

    async fn insert(&self, _: &NewUser) -> StoreResult<UserRecord> {
        Err(StoreError::uniqueness_violation(
            UniqueField::ExternalSubjectId,
        ))
    }
}

/// Every call fails as if the database were down
pub(crate) struct UnreachableStore;

#[async_trait]
impl UserStore for UnreachableStore {
    async fn find_by_external_subject_id(&self, _: &str) -> StoreResult<Option<UserRecord>> {
        Err(StoreError::unavailable("connection refused"))
    }

    async fn find_by_email(&self, _: &str) -> StoreResult<Option<UserRecord>> {
        Err(StoreError::unavailable("connection refused"))
    }

    async fn insert(&self, _: &NewUser) -> StoreResult<UserRecord> {
        Err(StoreError::unavailable("connection refused"))
    }
}

/// Lookups hang far longer than any resolver timeout used in tests
pub(crate) struct StalledStore;

#[async_trait]
impl UserStore for StalledStore {
    async fn find_by_external_subject_id(&self, _: &str) -> StoreResult<Option<UserRecord>> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(None)
    }

    async fn find_by_email(&self, _: &str) -> StoreResult<Option<UserRecord>> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(None)
    }

    async fn insert(&self, new_user: &NewUser) -> StoreResult<UserRecord> {
        Ok(UserRecord::from_new_user(new_user))
    }
}

/// Auth collaborator that cannot be reached
pub(crate) struct UnavailablePrincipal;

#[async_trait]
impl PrincipalSource for UnavailablePrincipal {
    async fn current_principal(&self) -> fin_auth::Result<Option<ExternalIdentity>> {
        Err(AuthError::provider_unavailable("session service timed out"))
    }
}
