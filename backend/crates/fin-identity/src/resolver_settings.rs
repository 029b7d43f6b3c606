use std::time::Duration;

pub const DEFAULT_STORE_TIMEOUT_MS: u64 = 5000;

#[derive(Debug, Clone)]
pub struct ResolverSettings {
    /// Upper bound on each individual store call
    pub store_timeout: Duration,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            store_timeout: Duration::from_millis(DEFAULT_STORE_TIMEOUT_MS),
        }
    }
}
