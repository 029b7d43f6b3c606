use crate::{DEFAULT_LOG_COLORED, DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_LEVEL, LogLevel};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Directory for `file`, relative to the config dir
    pub dir: String,
    /// Log to this file instead of stderr
    pub file: Option<String>,
    /// Colored stderr output (ignored for file output)
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            dir: String::from(DEFAULT_LOG_DIRECTORY),
            file: None,
            colored: DEFAULT_LOG_COLORED,
        }
    }
}
