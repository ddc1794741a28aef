use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for the domain, storage, and integration layers.
#[derive(Debug, Error)]
pub enum WalletError {
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("{collection} record `{id}` not found")]
    RecordNotFound {
        collection: &'static str,
        id: String,
    },
    #[error("Operation not allowed: {0}")]
    NotAllowed(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Report error: {0}")]
    Report(String),
}

pub type Result<T> = StdResult<T, WalletError>;

impl From<std::io::Error> for WalletError {
    fn from(err: std::io::Error) -> Self {
        WalletError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        WalletError::Serde(err.to_string())
    }
}

impl From<reqwest::Error> for WalletError {
    fn from(err: reqwest::Error) -> Self {
        WalletError::Network(err.to_string())
    }
}

/// User-facing shell error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] WalletError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Unknown command `{0}`")]
    UnknownCommand(String),
    #[error("Command `{0}` failed")]
    CommandFailed(String),
    #[error("Prompt failed: {0}")]
    Prompt(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<rustyline::error::ReadlineError> for CliError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        CliError::Prompt(err.to_string())
    }
}

impl From<dialoguer::Error> for CliError {
    fn from(err: dialoguer::Error) -> Self {
        CliError::Prompt(err.to_string())
    }
}
