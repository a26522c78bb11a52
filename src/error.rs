//! Custom error types for the travels manager
//!
//! Two layers of errors live here. `CommandError` is what a user sees after a
//! rejected command: its `Display` output is the terse status line printed by
//! the interpreter. `TravelError` covers everything below that (file I/O,
//! parsing stored lines, configuration) and is never shown verbatim to users.

use thiserror::Error;

/// A rejected interactive command
///
/// Every variant renders as the single line the interpreter prints.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// The command token is not one of the known commands
    #[error("wrong command")]
    WrongCommand,

    /// Wrong number of `;`-separated arguments (or an empty one where all are required)
    #[error("wrong field count")]
    WrongFieldCount,

    /// Malformed id, duplicate id on add, or unknown id on edit/del
    #[error("wrong id")]
    WrongId,

    #[error("wrong date")]
    WrongDate,

    #[error("wrong day count")]
    WrongDayCount,

    #[error("wrong price")]
    WrongPrice,

    #[error("wrong vehicle")]
    WrongVehicle,

    /// `avg` over an empty collection
    #[error("No travels found.")]
    NoTravels,
}

/// The main error type for storage and configuration
#[derive(Error, Debug)]
pub enum TravelError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Storage errors (reading, writing or renaming the data file)
    #[error("Storage error: {0}")]
    Storage(String),

    /// A command was rejected before anything was changed
    #[error(transparent)]
    Rejected(#[from] CommandError),
}

impl TravelError {
    /// The user-facing rejection, if this error is one
    pub fn as_rejection(&self) -> Option<CommandError> {
        match self {
            Self::Rejected(e) => Some(*e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TravelError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for TravelError {
    fn from(err: csv::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Result type alias for storage operations
pub type TravelResult<T> = Result<T, TravelError>;
