use crate::{ResolveError, ResolverSettings, Result as ResolveResult};

use fin_auth::PrincipalSource;
use fin_core::{ExternalIdentity, NewUser, StoreError, StoreResult, UserRecord, UserStore};

use std::future::Future;

use log::{debug, error, info, warn};

/// Find-or-create of the internal user behind an authenticated principal.
///
/// Lookup order is external subject id, then email, then insert. The resolver
/// keeps no state of its own: concurrent first-time calls for one identity are
/// arbitrated by the store's unique indexes, and the loser of an insert race
/// re-reads the winner's record once.
pub struct IdentityResolver<S> {
    store: S,
    settings: ResolverSettings,
}

impl<S: UserStore> IdentityResolver<S> {
    pub fn new(store: S, settings: ResolverSettings) -> Self {
        Self { store, settings }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Resolve whoever the auth collaborator says is making this request.
    ///
    /// The collaborator is asked exactly once. Anonymous callers yield `Ok(None)`;
    /// a collaborator failure is an error, never a silent sign-out.
    pub async fn check_user(
        &self,
        principal_source: &dyn PrincipalSource,
    ) -> ResolveResult<Option<UserRecord>> {
        let principal = principal_source.current_principal().await?;
        self.resolve(principal.as_ref()).await
    }

    /// `None` is the unauthenticated case and touches no store.
    pub async fn resolve(
        &self,
        identity: Option<&ExternalIdentity>,
    ) -> ResolveResult<Option<UserRecord>> {
        match identity {
            Some(identity) => self.resolve_identity(identity).await.map(Some),
            None => {
                debug!("No authenticated principal, skipping user resolution");
                Ok(None)
            }
        }
    }

    pub async fn resolve_identity(&self, identity: &ExternalIdentity) -> ResolveResult<UserRecord> {
        identity.validate()?;

        if let Some(user) = self.lookup(identity).await? {
            return Ok(user);
        }

        let new_user = NewUser::from_identity(identity);
        match self.bounded(self.store.insert(&new_user)).await {
            Ok(user) => {
                info!(
                    "Created user {} for subject {}",
                    user.id, identity.external_subject_id
                );
                Ok(user)
            }
            Err(StoreError::UniquenessViolation { field, .. }) => {
                // The competing writer committed before our insert was rejected,
                // so a single re-read is enough.
                warn!(
                    "Insert for subject {} lost a race on {}, re-reading",
                    identity.external_subject_id, field
                );

                match self.lookup(identity).await? {
                    Some(user) => Ok(user),
                    None => {
                        error!(
                            "Insert for subject {} rejected on {} but no record is visible",
                            identity.external_subject_id, field
                        );
                        Err(ResolveError::identity_conflict(format!(
                            "insert for subject {} rejected on {} and no matching record found",
                            identity.external_subject_id, field
                        )))
                    }
                }
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Read-only lookup by subject id, bounded like every other store call
    pub async fn lookup_by_subject(
        &self,
        external_subject_id: &str,
    ) -> ResolveResult<Option<UserRecord>> {
        Ok(self
            .bounded(self.store.find_by_external_subject_id(external_subject_id))
            .await?)
    }

    /// Read-only lookup by email, bounded like every other store call
    pub async fn lookup_by_email(&self, email: &str) -> ResolveResult<Option<UserRecord>> {
        Ok(self.bounded(self.store.find_by_email(email)).await?)
    }

    async fn lookup(&self, identity: &ExternalIdentity) -> ResolveResult<Option<UserRecord>> {
        let by_subject = self
            .bounded(
                self.store
                    .find_by_external_subject_id(&identity.external_subject_id),
            )
            .await?;
        if let Some(user) = by_subject {
            debug!(
                "Resolved subject {} to user {} by subject id",
                identity.external_subject_id, user.id
            );
            return Ok(Some(user));
        }

        // Record created through another onboarding path; its subject id is left unchanged
        let by_email = self.bounded(self.store.find_by_email(&identity.email)).await?;
        if let Some(user) = &by_email {
            debug!(
                "Resolved subject {} to user {} by email",
                identity.external_subject_id, user.id
            );
        }

        Ok(by_email)
    }

    async fn bounded<T>(&self, operation: impl Future<Output = StoreResult<T>>) -> StoreResult<T> {
        match tokio::time::timeout(self.settings.store_timeout, operation).await {
            Ok(result) => result,
            Err(_) => Err(StoreError::unavailable(format!(
                "store call exceeded {:?}",
                self.settings.store_timeout
            ))),
        }
    }
}
