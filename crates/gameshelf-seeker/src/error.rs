//! Error types for the seeker crate.

use std::io;

use thiserror::Error;

/// Errors that can occur when filtering, sorting or selecting games.
#[derive(Debug, Error)]
pub enum SeekerError {
    /// The clause names a field that does not exist.
    #[error("unknown field '{0}'")]
    UnknownField(String),

    /// The operator token is not recognized, or not valid for the field.
    #[error("unknown operator '{0}'")]
    UnknownOperator(String),

    /// The clause contains none of the recognized operators.
    #[error("invalid filter format: '{0}'")]
    InvalidFilterSyntax(String),

    /// A numeric field was compared against a value that is not a number.
    #[error("'{operand}' is not a valid number for field '{field}'")]
    BadOperand { field: String, operand: String },

    /// The requested sort attribute is not supported.
    #[error("cannot sort on '{0}'")]
    UnknownSortKey(String),

    /// A selection token could not be interpreted.
    #[error("invalid selection '{0}'")]
    InvalidToken(String),

    /// An index or range falls outside the addressable sequence.
    #[error("selection '{token}' is out of range (1-{len})")]
    OutOfRange { token: String, len: usize },

    /// No game with the given name was found.
    #[error("game not found: {0}")]
    NotFound(String),

    /// Writing an exported list failed.
    #[error("failed to write game list: {0}")]
    Io(#[from] io::Error),
}

impl SeekerError {
    pub(crate) fn bad_operand(field: impl Into<String>, operand: impl Into<String>) -> Self {
        Self::BadOperand {
            field: field.into(),
            operand: operand.into(),
        }
    }

    pub(crate) fn out_of_range(token: impl Into<String>, len: usize) -> Self {
        Self::OutOfRange {
            token: token.into(),
            len,
        }
    }
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, SeekerError>;
