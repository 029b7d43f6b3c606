use crate::DEFAULT_LOG_LEVEL_STRING;

use std::ops::Deref;
use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Deserializer};

/// LevelFilter that deserializes leniently, falling back to Info
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(pub LevelFilter);

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)
            .unwrap_or_else(|_| String::from(DEFAULT_LOG_LEVEL_STRING));

        Ok(LogLevel::parse_lenient(&s))
    }
}

impl LogLevel {
    fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "off" => LogLevel(LevelFilter::Off),
            "error" => LogLevel(LevelFilter::Error),
            "warn" => LogLevel(LevelFilter::Warn),
            "debug" => LogLevel(LevelFilter::Debug),
            "trace" => LogLevel(LevelFilter::Trace),
            _ => LogLevel(LevelFilter::Info),
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(log_level: LogLevel) -> Self {
        log_level.0
    }
}

impl Deref for LogLevel {
    type Target = LevelFilter;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for LogLevel {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(LogLevel::parse_lenient(s))
    }
}
