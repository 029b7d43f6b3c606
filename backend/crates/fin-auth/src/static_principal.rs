use crate::{PrincipalSource, Result as AuthErrorResult};

use fin_core::ExternalIdentity;

use async_trait::async_trait;

/// Always reports the same principal
#[derive(Debug, Clone, Default)]
pub struct StaticPrincipal {
    identity: Option<ExternalIdentity>,
}

impl StaticPrincipal {
    pub fn signed_in(identity: ExternalIdentity) -> Self {
        Self {
            identity: Some(identity),
        }
    }

    pub fn anonymous() -> Self {
        Self { identity: None }
    }
}

#[async_trait]
impl PrincipalSource for StaticPrincipal {
    async fn current_principal(&self) -> AuthErrorResult<Option<ExternalIdentity>> {
        Ok(self.identity.clone())
    }
}
