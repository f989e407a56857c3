//! Error handling for curve operations

use core::fmt;

/// The error type for elliptic-curve operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A point fails the curve equation or its encoding is malformed
    InvalidPoint {
        /// Reason why the point was rejected
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// An underlying field operation failed
    Field(ng_field::Error),
}

/// Result type for elliptic-curve operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPoint { reason } => write!(f, "Invalid point: {}", reason),
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Field(err) => write!(f, "Field error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Field(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ng_field::Error> for Error {
    fn from(err: ng_field::Error) -> Self {
        Error::Field(err)
    }
}
