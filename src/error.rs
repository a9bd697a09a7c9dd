//! Error types for the fallible surfaces around the posit engine.
//!
//! The arithmetic itself never fails: division by zero, overflow and underflow
//! are expressed through the NaR sentinel and saturation. Only the debug
//! bit-string parser and the matrix dispatcher can reject their input.

use thiserror::Error;

/// Result type alias for fallible posit operations.
pub type Result<T> = std::result::Result<T, PositError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositError {
    /// A debug bit string did not have exactly one digit per encoding bit.
    #[error("bit string must have exactly 8 digits, got {len}")]
    InvalidLength { len: usize },

    /// A debug bit string contained something other than `0` or `1`.
    #[error("invalid binary digit {found:?} at position {position}")]
    InvalidDigit { found: char, position: usize },

    /// The inner dimensions of a matrix product do not agree.
    #[error("cannot multiply a {left:?} matrix by a {right:?} matrix")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
}
