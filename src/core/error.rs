//! Error handling logic

use std::fmt;

/// Failures reported by the checked layer in [`crate::validation`].
///
/// The arithmetic and function library never produce these: they follow
/// IEEE-754 and signal invalid results through NaN/Infinity components. This
/// type exists for callers who want that contamination turned into a `Result`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComplexError {
    /// A component is NaN or infinite.
    NonFinite {
        /// NonFinite failure message
        message: String,
    },

    /// A checked inversion or division met an exactly zero divisor.
    ZeroModulus {
        /// ZeroModulus failure message
        message: String,
    },

    /// An approximate comparison exceeded its tolerance.
    OutOfTolerance {
        /// OutOfTolerance failure message
        message: String,
    },
}

impl fmt::Display for ComplexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplexError::NonFinite { message } => write!(f, "Non-finite value: {}", message),
            ComplexError::ZeroModulus { message } => write!(f, "Zero modulus: {}", message),
            ComplexError::OutOfTolerance { message } => write!(f, "Out of tolerance: {}", message),
        }
    }
}

impl std::error::Error for ComplexError {}
