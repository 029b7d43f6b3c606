use fin_config::ConfigError;
use fin_db::DbError;
use fin_identity::ResolveError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("{0}")]
    Resolve(#[from] ResolveError),

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON error: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG",
            Self::Database(_) => "STORE_UNAVAILABLE",
            Self::Resolve(e) => e.error_code(),
            Self::Logger { .. } => "LOGGER",
            Self::Json { .. } => "JSON",
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        CliError::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
