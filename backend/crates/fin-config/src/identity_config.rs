use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_STORE_TIMEOUT_MS: u64 = 50;
pub const MAX_STORE_TIMEOUT_MS: u64 = 60_000;
pub const DEFAULT_STORE_TIMEOUT_MS: u64 = 5_000;

/// Identity resolution settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Upper bound on each user store call during resolution
    pub store_timeout_ms: u64,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            store_timeout_ms: DEFAULT_STORE_TIMEOUT_MS,
        }
    }
}

impl IdentityConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.store_timeout_ms < MIN_STORE_TIMEOUT_MS
            || self.store_timeout_ms > MAX_STORE_TIMEOUT_MS
        {
            return Err(ConfigError::identity(format!(
                "identity.store_timeout_ms must be {}-{}, got {}",
                MIN_STORE_TIMEOUT_MS, MAX_STORE_TIMEOUT_MS, self.store_timeout_ms
            )));
        }

        Ok(())
    }
}
