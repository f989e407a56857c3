//! Error handling for field arithmetic

use core::fmt;

/// The error type for field arithmetic operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The modulus handed to `Field::new` cannot describe a prime field
    InvalidModulus {
        /// Reason why the modulus was rejected
        reason: &'static str,
    },

    /// Two operands belong to different fields
    FieldMismatch {
        /// Operation that mixed elements of distinct fields
        operation: &'static str,
    },

    /// The operand has no multiplicative inverse in the field
    NotInvertible,

    /// A decoded value is not a canonical residue of the field
    OutOfRange {
        /// Context where the out-of-range value was seen
        context: &'static str,
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
}

/// Result type for field arithmetic operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidModulus { reason } => {
                write!(f, "Invalid modulus: {}", reason)
            }
            Error::FieldMismatch { operation } => {
                write!(f, "Operands of {} belong to different fields", operation)
            }
            Error::NotInvertible => write!(f, "Element has no multiplicative inverse"),
            Error::OutOfRange { context } => {
                write!(f, "Value out of range for {}", context)
            }
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
        }
    }
}

impl std::error::Error for Error {}
