//! Reconciles the identity asserted by the authentication provider with the
//! internal user record, creating the record on first sight.

pub mod error;
pub mod identity_resolver;
pub mod memory_store;
pub mod resolver_settings;

pub use error::{ResolveError, Result};
pub use identity_resolver::IdentityResolver;
pub use memory_store::InMemoryUserStore;
pub use resolver_settings::ResolverSettings;

#[cfg(test)]
mod tests;
