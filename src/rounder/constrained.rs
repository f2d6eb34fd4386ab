// ============================================================================
// Constrained Rounder
// Nearest-value rounding with a restricted last-place digit alphabet
// ============================================================================

use crate::domain::Digit;
use crate::interfaces::Rounder;
use crate::numeric::{round_to_step, unit_for_precision, RoundingError, RoundingResult};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use smallvec::SmallVec;

/// Rounds values to a target precision while constraining the last
/// significant digit to a fixed set of allowed digits.
///
/// Standard rounding picks the nearest multiple of the unit at the target
/// precision. Here the last-place digit is restricted, so for each allowed
/// digit there are exactly two admissible values straddling the input (one in
/// the current decade, one in the decade below); the rounder picks the
/// correct one of those two per digit, then the nearest across all digits.
/// Exact ties resolve to the larger value, independent of digit order.
///
/// Immutable after construction; a single instance can be shared across
/// threads and reused for any number of `round` calls.
///
/// # Example
/// ```
/// use constrained_rounder::domain::Digit;
/// use constrained_rounder::rounder::ConstrainedRounder;
/// use rust_decimal::Decimal;
///
/// // Prices round to tenths and must end in 0 or 5.
/// let digits = [Digit::new(0).unwrap(), Digit::new(5).unwrap()];
/// let rounder = ConstrainedRounder::new(1, &digits).unwrap();
/// assert_eq!(rounder.round(Decimal::new(1234, 2)), Decimal::new(125, 1));
/// ```
#[derive(Debug, Clone)]
pub struct ConstrainedRounder {
    precision: i32,
    /// Magnitude of one step at the target last place (10^-precision)
    unit: Decimal,
    /// Spacing between consecutive values sharing a last-place digit (10 units)
    decade: Decimal,
    /// Half-way rounding boundary above the input (5 units)
    half_decade: Decimal,
    allowed: SmallVec<[Digit; 10]>,
}

impl ConstrainedRounder {
    /// Create a rounder for the given precision and allowed last-place digits.
    ///
    /// # Arguments
    /// * `precision` - Digits after the decimal point to round to; negative
    ///   values round to tens, hundreds, and so on
    /// * `allowed_last_place_digits` - Digits the result may end in
    ///
    /// # Errors
    /// - `NoAllowedDigits` when the digit slice is empty
    /// - `PrecisionOutOfRange` when the precision is unsupported
    pub fn new(
        precision: i32,
        allowed_last_place_digits: &[Digit],
    ) -> RoundingResult<Self> {
        if allowed_last_place_digits.is_empty() {
            return Err(RoundingError::NoAllowedDigits);
        }
        let unit = unit_for_precision(precision)?;
        let allowed = SmallVec::from_slice(allowed_last_place_digits);

        tracing::debug!(precision, digits = ?allowed, "constrained rounder created");

        Ok(Self {
            precision,
            unit,
            decade: unit * Decimal::TEN,
            half_decade: unit * Decimal::new(5, 0),
            allowed,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The configured precision.
    #[inline]
    pub const fn precision(&self) -> i32 {
        self.precision
    }

    /// The magnitude of one increment at the target precision.
    #[inline]
    pub const fn unit(&self) -> Decimal {
        self.unit
    }

    /// The allowed last-place digits, in the order they were supplied.
    #[inline]
    pub fn allowed_digits(&self) -> &[Digit] {
        &self.allowed
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    /// Round `value` to the nearest admissible value.
    ///
    /// The higher-order digits come from rounding the input one place coarser
    /// than the target precision (half away from zero). Each allowed digit
    /// then contributes the single admissible value nearest the input, and
    /// the global nearest wins; an exact tie goes to the larger value.
    pub fn round(&self, value: Decimal) -> Decimal {
        let base = round_to_step(value, self.decade);

        let (mut best_value, mut best_difference) =
            self.candidate_for_digit(value, base, self.allowed[0]);
        for &digit in &self.allowed[1..] {
            let (modified, difference) = self.candidate_for_digit(value, base, digit);
            if difference < best_difference
                || (difference == best_difference && modified > best_value)
            {
                best_value = modified;
                best_difference = difference;
            }
        }

        best_value.normalize()
    }

    /// Round a float, converting through exact decimals.
    ///
    /// # Errors
    /// - `NonFiniteInput` for NaN or infinite input
    /// - `ValueOutOfRange` when the value cannot be represented as a decimal
    pub fn round_f64(&self, value: f64) -> RoundingResult<f64> {
        if !value.is_finite() {
            return Err(RoundingError::NonFiniteInput);
        }
        let decimal = Decimal::from_f64(value).ok_or(RoundingError::ValueOutOfRange)?;
        self.round(decimal)
            .to_f64()
            .ok_or(RoundingError::ValueOutOfRange)
    }

    /// The admissible value ending in `digit` that is nearest to `value`,
    /// together with its absolute distance from `value`.
    ///
    /// Of the two straddling candidates, the one in the current decade wins
    /// unless it overshoots the half-way boundary above the input; then the
    /// candidate one decade lower is taken.
    #[inline]
    fn candidate_for_digit(
        &self,
        value: Decimal,
        base: Decimal,
        digit: Digit,
    ) -> (Decimal, Decimal) {
        let upper = base + Decimal::from(digit.value()) * self.unit;
        let modified = if upper < value + self.half_decade {
            upper
        } else {
            upper - self.decade
        };
        (modified, (modified - value).abs())
    }
}

impl Rounder for ConstrainedRounder {
    fn round(&self, value: Decimal) -> Decimal {
        ConstrainedRounder::round(self, value)
    }

    fn name(&self) -> &str {
        "constrained-last-digit"
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(values: &[i64]) -> Vec<Digit> {
        values.iter().map(|&v| Digit::new(v).unwrap()).collect()
    }

    fn rounder(precision: i32, values: &[i64]) -> ConstrainedRounder {
        ConstrainedRounder::new(precision, &digits(values)).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_digit_set_rejected() {
        for precision in [-2, 0, 1, 5] {
            assert_eq!(
                ConstrainedRounder::new(precision, &[]).unwrap_err(),
                RoundingError::NoAllowedDigits
            );
        }
    }

    #[test]
    fn test_unsupported_precision_rejected() {
        let five = digits(&[5]);
        assert_eq!(
            ConstrainedRounder::new(29, &five).unwrap_err(),
            RoundingError::PrecisionOutOfRange { precision: 29 }
        );
        assert_eq!(
            ConstrainedRounder::new(-28, &five).unwrap_err(),
            RoundingError::PrecisionOutOfRange { precision: -28 }
        );
    }

    #[test]
    fn test_accessors() {
        let r = rounder(1, &[3, 5, 8]);
        assert_eq!(r.precision(), 1);
        assert_eq!(r.unit(), dec("0.1"));
        assert_eq!(r.allowed_digits(), digits(&[3, 5, 8]).as_slice());
    }

    #[test]
    fn test_matches_standard_rounding_when_all_digits_allowed() {
        let r = rounder(1, &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(r.round(dec("11.05")), dec("11.1"));
        assert_eq!(r.round(dec("11.11")), dec("11.1"));

        // Same result when the digits are supplied in reverse
        let reversed = rounder(1, &[9, 8, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(reversed.round(dec("11.11")), dec("11.1"));
    }

    #[test]
    fn test_single_allowed_digit_forces_last_place() {
        let r = rounder(1, &[4]);
        assert_eq!(r.round(dec("11.01")), dec("11.4"));
        assert_eq!(r.round(dec("11.71")), dec("11.4"));
    }

    #[test]
    fn test_carries_into_higher_place_when_closest() {
        let r = rounder(1, &[7, 1, 5]);
        assert_eq!(r.round(dec("10.91")), dec("11.1"));
    }

    #[test]
    fn test_borrows_from_higher_place_when_closest() {
        let r = rounder(1, &[5, 4, 7]);
        assert_eq!(r.round(dec("11.04")), dec("10.7"));
    }

    #[test]
    fn test_equidistant_candidates_round_up() {
        assert_eq!(rounder(1, &[3, 7]).round(dec("12.5")), dec("12.7"));
        // Digit order must not affect the tie-break
        assert_eq!(rounder(1, &[8, 3]).round(dec("12.55")), dec("12.8"));
    }

    #[test]
    fn test_precision_scaling() {
        // (precision, value, expected) with allowed digits {5, 7}
        let cases = [
            (2, "12.666", "12.67"),
            (2, "12.555", "12.55"),
            (1, "12.666", "12.7"),
            (1, "12.555", "12.5"),
            (0, "126.666", "127"),
            (0, "125.555", "125"),
            (-1, "1266.666", "1270"),
            (-1, "1255.555", "1250"),
            (-2, "12666.666", "12700"),
            (-2, "12555.555", "12500"),
            (-3, "126666.666", "127000"),
            (-3, "125555.555", "125000"),
            (-4, "1266666.666", "1270000"),
            (-4, "1255555.555", "1250000"),
            (-5, "12666666.666", "12700000"),
            (-5, "12555555.555", "12500000"),
            (-6, "126666666.666", "127000000"),
            (-6, "125555555.555", "125000000"),
        ];
        for (precision, value, expected) in cases {
            let r = rounder(precision, &[5, 7]);
            assert_eq!(
                r.round(dec(value)),
                dec(expected),
                "precision {} value {}",
                precision,
                value
            );
        }
    }

    #[test]
    fn test_digit_order_does_not_change_result() {
        let forward = rounder(1, &[1, 4, 9]);
        let backward = rounder(1, &[9, 4, 1]);
        for value in ["10.91", "11.04", "11.2", "12.5", "0.05", "-3.33"] {
            assert_eq!(forward.round(dec(value)), backward.round(dec(value)), "{}", value);
        }
    }

    #[test]
    fn test_duplicate_digits_are_harmless() {
        let deduped = rounder(1, &[5, 7]);
        let duplicated = rounder(1, &[5, 5, 7, 5]);
        for value in ["12.666", "12.555", "12.5"] {
            assert_eq!(deduped.round(dec(value)), duplicated.round(dec(value)));
        }
    }

    #[test]
    fn test_negative_values() {
        let r = rounder(1, &[5]);
        assert_eq!(r.round(dec("-12.34")), dec("-12.5"));
        assert_eq!(r.round(dec("-12.61")), dec("-12.5"));
    }

    #[test]
    fn test_candidate_exactly_at_half_boundary_takes_lower_decade() {
        // The upper candidate must be strictly below value + 5 units;
        // sitting exactly on the boundary pushes it one decade down.
        let r = rounder(1, &[5]);
        assert_eq!(r.round(Decimal::ZERO), dec("-0.5"));
    }

    #[test]
    fn test_round_f64() {
        let r = rounder(1, &[4]);
        assert_eq!(r.round_f64(11.0).unwrap(), 11.4);
        assert_eq!(r.round_f64(11.71).unwrap(), 11.4);
    }

    #[test]
    fn test_round_f64_rejects_non_finite() {
        let r = rounder(1, &[4]);
        assert_eq!(r.round_f64(f64::NAN).unwrap_err(), RoundingError::NonFiniteInput);
        assert_eq!(
            r.round_f64(f64::INFINITY).unwrap_err(),
            RoundingError::NonFiniteInput
        );
        assert_eq!(
            r.round_f64(f64::NEG_INFINITY).unwrap_err(),
            RoundingError::NonFiniteInput
        );
    }

    #[test]
    fn test_round_f64_rejects_unrepresentable() {
        let r = rounder(1, &[4]);
        assert_eq!(r.round_f64(f64::MAX).unwrap_err(), RoundingError::ValueOutOfRange);
    }

    #[test]
    fn test_trait_object_usage() {
        let r: Box<dyn Rounder> = Box::new(rounder(1, &[3, 5, 8]));
        assert_eq!(r.name(), "constrained-last-digit");
        // 12.3 and 12.5 are equidistant; the tie resolves upward
        assert_eq!(r.round(dec("12.40")), dec("12.5"));
    }
}
