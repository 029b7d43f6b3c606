use std::time::Duration;

const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_BUSY_TIMEOUT_SECS: u64 = 5;

/// Pool tuning for the user database
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub max_connections: u32,
    /// How long a writer waits on a locked database before failing
    pub busy_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            busy_timeout: Duration::from_secs(DEFAULT_BUSY_TIMEOUT_SECS),
        }
    }
}
