use crate::{ConfigError, ConfigErrorResult, DEFAULT_DATABASE_FILENAME};

use serde::Deserialize;

pub const MIN_MAX_CONNECTIONS: u32 = 1;
pub const MAX_MAX_CONNECTIONS: u32 = 100;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

pub const MIN_BUSY_TIMEOUT_SECS: u64 = 1;
pub const MAX_BUSY_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_BUSY_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file, relative to the config dir
    pub path: String,
    pub max_connections: u32,
    pub busy_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            busy_timeout_secs: DEFAULT_BUSY_TIMEOUT_SECS,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let db_path = std::path::Path::new(&self.path);
        if self.path.is_empty() || db_path.is_absolute() || self.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative, non-empty and cannot contain '..'",
            ));
        }

        if self.max_connections < MIN_MAX_CONNECTIONS || self.max_connections > MAX_MAX_CONNECTIONS
        {
            return Err(ConfigError::database(format!(
                "database.max_connections must be {}-{}, got {}",
                MIN_MAX_CONNECTIONS, MAX_MAX_CONNECTIONS, self.max_connections
            )));
        }

        if self.busy_timeout_secs < MIN_BUSY_TIMEOUT_SECS
            || self.busy_timeout_secs > MAX_BUSY_TIMEOUT_SECS
        {
            return Err(ConfigError::database(format!(
                "database.busy_timeout_secs must be {}-{}, got {}",
                MIN_BUSY_TIMEOUT_SECS, MAX_BUSY_TIMEOUT_SECS, self.busy_timeout_secs
            )));
        }

        Ok(())
    }
}
