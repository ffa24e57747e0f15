//! CLI error definitions.

use rustyline::error::ReadlineError;
use store_core::{UseCaseError, domain::ValueObjectError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("unknown command '{0}' (type 'help' for the list of commands)")]
    UnknownCommand(String),

    #[error("{command}: missing {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("{command}: '{value}' is not a valid number")]
    InvalidNumber { command: &'static str, value: String },

    #[error("{command}: unexpected argument '{value}'")]
    UnexpectedArgument { command: &'static str, value: String },

    #[error(transparent)]
    InvalidId(#[from] ValueObjectError),

    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("readline error: {0}")]
    Readline(#[from] ReadlineError),

    #[error("input reader stopped unexpectedly: {0}")]
    Reader(#[from] tokio::task::JoinError),
}
