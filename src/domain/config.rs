// ============================================================================
// Rounder Configuration
// Plain-data description of a rounding rule, validated before use
// ============================================================================

use crate::numeric::{unit_for_precision, RoundingError, RoundingResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for building a rounder.
///
/// Carries raw values so it can be produced by callers that read rounding
/// rules from their own settings; `validate` applies the same checks the
/// rounder constructor enforces.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RounderConfig {
    /// Number of digits after the decimal point to round to.
    /// Negative values round to tens, hundreds, and so on.
    pub precision: i32,

    /// Digits the rounded value may carry at its last significant place.
    /// Must be non-empty; each entry must be in [0, 9].
    pub allowed_last_place_digits: Vec<u8>,
}

impl RounderConfig {
    pub fn new(precision: i32, allowed_last_place_digits: Vec<u8>) -> Self {
        Self {
            precision,
            allowed_last_place_digits,
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    /// - `NoAllowedDigits` when the digit list is empty
    /// - `InvalidDigit` when an entry is outside [0, 9]
    /// - `PrecisionOutOfRange` when the precision is unsupported
    pub fn validate(&self) -> RoundingResult<()> {
        if self.allowed_last_place_digits.is_empty() {
            return Err(RoundingError::NoAllowedDigits);
        }
        for &digit in &self.allowed_last_place_digits {
            if digit > 9 {
                return Err(RoundingError::InvalidDigit {
                    value: digit as i64,
                });
            }
        }
        unit_for_precision(self.precision).map(|_| ())
    }
}
