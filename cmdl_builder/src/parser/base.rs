use thiserror::Error;

use crate::api::InvalidCapture;

/// An invalid parameter declaration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ConfigError(pub(crate) String);

/// A failure to bind a parameter against the command line.
///
/// Each variant carries the offending token and its offset in the original input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A flag which requires a value is not followed by one.
    #[error("Missing value for '{flag}'.")]
    MissingValue {
        /// The flag token.
        flag: String,
        /// The offset of the flag token.
        offset: usize,
    },

    /// A value token cannot be converted to the parameter's type.
    #[error("Malformed value: {reason}")]
    MalformedValue {
        /// The value token.
        token: String,
        /// The offset of the value token.
        offset: usize,
        /// The conversion failure.
        reason: InvalidCapture,
    },

    /// A non-repeatable flag appears more than once.
    #[error("Duplicate argument '{flag}'.")]
    DuplicateArgument {
        /// The repeated flag token.
        flag: String,
        /// The offset of the repeated occurrence.
        offset: usize,
    },

    /// A tuple flag is followed by fewer values than its arity.
    #[error("Incomplete tuple for '{flag}' (provided={provided}, expected={expected}).")]
    IncompleteTuple {
        /// The flag token.
        flag: String,
        /// The number of values available.
        provided: usize,
        /// The arity of the tuple.
        expected: usize,
        /// The offset of the flag token.
        offset: usize,
    },
}

impl ParseError {
    /// The offset in the original input of the token this error refers to.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::MissingValue { offset, .. }
            | ParseError::MalformedValue { offset, .. }
            | ParseError::DuplicateArgument { offset, .. }
            | ParseError::IncompleteTuple { offset, .. } => *offset,
        }
    }
}

/// Any failure from declaring or binding a parameter.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// The declaration was invalid.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The command line did not fit the declaration.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}
