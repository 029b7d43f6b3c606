use crate::{PrincipalSource, ProviderClaims, Result as AuthErrorResult};

use fin_core::ExternalIdentity;

use async_trait::async_trait;

/// Principal backed by the claims attached to the current request, if any
#[derive(Debug, Clone, Default)]
pub struct ClaimsPrincipal {
    claims: Option<ProviderClaims>,
}

impl ClaimsPrincipal {
    pub fn new(claims: Option<ProviderClaims>) -> Self {
        Self { claims }
    }
}

#[async_trait]
impl PrincipalSource for ClaimsPrincipal {
    async fn current_principal(&self) -> AuthErrorResult<Option<ExternalIdentity>> {
        self.claims
            .as_ref()
            .map(ProviderClaims::to_identity)
            .transpose()
    }
}
