// ============================================================================
// Precision Scale
// Power-of-ten units and step rounding over exact decimals
// ============================================================================

use super::errors::{RoundingError, RoundingResult};
use rust_decimal::{Decimal, RoundingStrategy};

/// Smallest supported precision (rounding to the 10^27 place).
///
/// Bounded so that the 10x-unit step a rounder derives from the unit still
/// fits in `Decimal`'s 28-digit mantissa.
pub const MIN_PRECISION: i32 = -27;

/// Largest supported precision (28 digits after the decimal point).
pub const MAX_PRECISION: i32 = 28;

/// Compute the magnitude of one increment at the given precision.
///
/// `precision` counts digits after the decimal point, so the unit is
/// `10^(-precision)`: precision 1 yields 0.1, precision 0 yields 1,
/// precision -2 yields 100.
///
/// # Errors
/// Returns `PrecisionOutOfRange` outside `MIN_PRECISION..=MAX_PRECISION`.
#[inline]
pub fn unit_for_precision(precision: i32) -> RoundingResult<Decimal> {
    if !(MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
        return Err(RoundingError::PrecisionOutOfRange { precision });
    }
    if precision >= 0 {
        Ok(Decimal::new(1, precision as u32))
    } else {
        Ok(Decimal::from_i128_with_scale(
            10i128.pow(precision.unsigned_abs()),
            0,
        ))
    }
}

/// Round `value` to the nearest multiple of `step`, with midpoints going
/// away from zero.
///
/// `step` must be positive. Both the quotient and the rescaled result stay
/// exact as long as `value` keeps a few digits of headroom below `Decimal`'s
/// 28-digit mantissa.
#[inline]
pub fn round_to_step(value: Decimal, step: Decimal) -> Decimal {
    (value / step).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero) * step
}
