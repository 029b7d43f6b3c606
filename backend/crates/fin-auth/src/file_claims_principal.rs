use crate::{AuthError, PrincipalSource, ProviderClaims, Result as AuthErrorResult};

use fin_core::ExternalIdentity;

use std::path::PathBuf;

use async_trait::async_trait;

/// Principal read from a JSON claims document on disk.
///
/// The document is either a claims object or `null` for an anonymous caller.
/// An unreadable file is a provider failure; an unparseable one is an invalid
/// claim.
#[derive(Debug, Clone)]
pub struct FileClaimsPrincipal {
    path: PathBuf,
}

impl FileClaimsPrincipal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PrincipalSource for FileClaimsPrincipal {
    async fn current_principal(&self) -> AuthErrorResult<Option<ExternalIdentity>> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            AuthError::provider_unavailable(format!(
                "cannot read claims from {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let claims: Option<ProviderClaims> = serde_json::from_str(&contents)
            .map_err(|e| AuthError::invalid_claim("claims", e.to_string()))?;

        claims.as_ref().map(ProviderClaims::to_identity).transpose()
    }
}
