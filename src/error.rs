//! Application error type.
//!
//! Library modules report their own `thiserror` enums; [`AppError`]
//! aggregates them for the binary and maps each to a message fit for a
//! terminal user.

use thiserror::Error;

use crate::config::ConfigError;
use crate::data::DataError;

/// The main application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// A `--data` file could not be used.
    #[error("{0}")]
    Data(#[from] DataError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn terminal(msg: impl Into<String>) -> Self {
        AppError::Terminal(msg.into())
    }

    pub fn other(msg: impl Into<String>) -> Self {
        AppError::Other(msg.into())
    }

    /// A message without technical detail, for display.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(e) => match e {
                ConfigError::NoConfigDir => {
                    "Could not find the configuration directory.".to_string()
                }
                ConfigError::CreateDirError(_) => {
                    "Could not create the configuration directory. Check file permissions."
                        .to_string()
                }
                ConfigError::ReadError(_) => {
                    "Could not read the configuration file.".to_string()
                }
                ConfigError::WriteError(_) => {
                    "Could not save the configuration. Check file permissions.".to_string()
                }
                ConfigError::ParseError(_) => {
                    "The configuration file is invalid. Check the file format.".to_string()
                }
                ConfigError::SerializeError(_) => {
                    "Could not save the configuration. Internal error.".to_string()
                }
                ConfigError::ValidationError(msg) => format!("Configuration error: {}", msg),
            },
            AppError::Data(e) => match e {
                DataError::ReadError(_) => "Could not read the data file.".to_string(),
                DataError::ParseError(_) => "The data file is not valid JSON.".to_string(),
                DataError::NotAnArray => {
                    "The data file must contain a JSON array of objects.".to_string()
                }
                DataError::NotAnObject(index) => {
                    format!("Record {} in the data file is not an object.", index)
                }
            },
            AppError::Io(_) => "A file operation failed. Check file permissions.".to_string(),
            AppError::Terminal(msg) => format!("Terminal error: {}", msg),
            AppError::Other(msg) => msg.clone(),
        }
    }

    /// Whether the application cannot continue.
    pub fn is_critical(&self) -> bool {
        matches!(
            self,
            AppError::Data(_) | AppError::Terminal(_) | AppError::Config(ConfigError::NoConfigDir)
        )
    }

    /// A hint on how to fix the problem.
    pub fn suggested_action(&self) -> Option<&'static str> {
        match self {
            AppError::Config(ConfigError::ParseError(_))
            | AppError::Config(ConfigError::ValidationError(_)) => {
                Some("Fix or delete the configuration file; defaults are used meanwhile.")
            }
            AppError::Data(DataError::NotAnArray) | AppError::Data(DataError::NotAnObject(_)) => {
                Some("Pass a file like [{\"id\": 1, \"name\": \"Ada\"}].")
            }
            AppError::Data(DataError::ReadError(_)) => Some("Check the path given to --data."),
            _ => None,
        }
    }
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;
