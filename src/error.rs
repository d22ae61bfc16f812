//! Error types.
//!
//! The `Display` text of every variant is the message shown to the user, so
//! the driving loop reports a failure by printing it and moving on.

use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures while turning a line into a [`Statement`](crate::Statement).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrepareError {
    #[error("Unrecognized keyword at start of '{0}'.")]
    UnrecognizedStatement(String),

    #[error("Syntax error. Could not parse statement.")]
    SyntaxError,

    #[error("ID must be positive.")]
    NegativeId,

    #[error("String is too long.")]
    StringTooLong,
}

/// Failures while running a prepared statement.
#[derive(Error, Debug)]
pub enum ExecuteError {
    /// No row was written.
    #[error("Error: Table full.")]
    TableFull,

    /// The output collaborator refused a row.
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetaCommandError {
    #[error("Unrecognized command '{0}'")]
    Unrecognized(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    MetaCommand(#[from] MetaCommandError),

    #[error(transparent)]
    Prepare(#[from] PrepareError),

    #[error(transparent)]
    Execute(#[from] ExecuteError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Whether the loop can report this error and read the next line.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Error::MetaCommand(_) | Error::Prepare(_) => true,
            Error::Execute(ExecuteError::TableFull) => true,
            Error::Execute(ExecuteError::Io(_)) | Error::Io(_) => false,
        }
    }
}
