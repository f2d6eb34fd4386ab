// ============================================================================
// Rounding Errors
// Error types for rounder construction and boundary conversions
// ============================================================================

use std::fmt;

/// Errors raised while building a rounder or converting values at the API
/// boundary. Rounding itself never fails: every error here is a precondition
/// check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingError {
    /// A digit outside the decimal range [0, 9]
    InvalidDigit { value: i64 },
    /// The allowed-digit set was empty
    NoAllowedDigits,
    /// Precision outside the supported range
    PrecisionOutOfRange { precision: i32 },
    /// NaN or infinite input at the float boundary
    NonFiniteInput,
    /// Finite float that cannot be represented as a decimal
    ValueOutOfRange,
}

impl fmt::Display for RoundingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundingError::InvalidDigit { value } => {
                write!(f, "invalid digit: {} is not in the range 0-9", value)
            },
            RoundingError::NoAllowedDigits => {
                write!(f, "at least one allowed last-place digit is required")
            },
            RoundingError::PrecisionOutOfRange { precision } => {
                write!(f, "precision {} is outside the supported range", precision)
            },
            RoundingError::NonFiniteInput => write!(f, "input value is NaN or infinite"),
            RoundingError::ValueOutOfRange => {
                write!(f, "input value cannot be represented as a decimal")
            },
        }
    }
}

impl std::error::Error for RoundingError {}

/// Result type alias for rounder operations
pub type RoundingResult<T> = Result<T, RoundingError>;
