pub mod claims_principal;
pub mod error;
pub mod file_claims_principal;
pub mod principal_source;
pub mod provider_claims;
pub mod static_principal;

pub use claims_principal::ClaimsPrincipal;
pub use error::{AuthError, Result};
pub use file_claims_principal::FileClaimsPrincipal;
pub use principal_source::PrincipalSource;
pub use provider_claims::ProviderClaims;
pub use static_principal::StaticPrincipal;
