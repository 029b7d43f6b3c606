use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    DatabaseConfig, IdentityConfig, LoggingConfig,
};

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub identity: IdentityConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for FIN_CONFIG_DIR env var, else use ./.fin/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply FIN_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: FIN_CONFIG_DIR env var > ./.fin/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.database.validate()?;
        self.identity.validate()?;

        Ok(())
    }

    /// Absolute path to the database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Absolute path to the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(filename) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(filename),
            )),
            None => Ok(None),
        }
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_secs(self.database.busy_timeout_secs)
    }

    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.identity.store_timeout_ms)
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  database: {} (max {} connections, busy timeout {}s)",
            self.database.path, self.database.max_connections, self.database.busy_timeout_secs
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
        info!(
            "  identity: store timeout {}ms",
            self.identity.store_timeout_ms
        );
    }

    fn apply_env_overrides(&mut self) {
        // Database
        Self::apply_env_string("FIN_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "FIN_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );
        Self::apply_env_parse(
            "FIN_DATABASE_BUSY_TIMEOUT_SECS",
            &mut self.database.busy_timeout_secs,
        );

        // Logging
        Self::apply_env_parse("FIN_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("FIN_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("FIN_LOG_FILE", &mut self.logging.file);

        // Identity
        Self::apply_env_parse(
            "FIN_IDENTITY_STORE_TIMEOUT_MS",
            &mut self.identity.store_timeout_ms,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
