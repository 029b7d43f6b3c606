use crate::Result as AuthErrorResult;

use fin_core::ExternalIdentity;

use async_trait::async_trait;

/// Per-request view of the authentication provider.
///
/// `Ok(None)` is the anonymous caller, which is not an error.
#[async_trait]
pub trait PrincipalSource: Send + Sync {
    async fn current_principal(&self) -> AuthErrorResult<Option<ExternalIdentity>>;
}
