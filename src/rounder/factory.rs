// ============================================================================
// Rounder Factory
// Creates rounders from validated configuration
// ============================================================================

use crate::domain::{Digit, RounderConfig};
use crate::numeric::RoundingResult;
use crate::rounder::ConstrainedRounder;

/// Creates a rounder from configuration.
///
/// # Errors
/// Propagates the validation failures of [`RounderConfig::validate`].
///
/// # Example
/// ```
/// use constrained_rounder::domain::RounderConfig;
/// use constrained_rounder::rounder::create_from_config;
/// use rust_decimal::Decimal;
///
/// let config = RounderConfig::new(2, vec![0, 5, 9]);
/// let rounder = create_from_config(&config).unwrap();
/// assert_eq!(rounder.round(Decimal::new(1262, 2)), Decimal::new(126, 1));
/// ```
pub fn create_from_config(config: &RounderConfig) -> RoundingResult<ConstrainedRounder> {
    config.validate()?;

    let digits: Vec<Digit> = config
        .allowed_last_place_digits
        .iter()
        .map(|&digit| Digit::new(digit as i64))
        .collect::<RoundingResult<_>>()?;

    ConstrainedRounder::new(config.precision, &digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::RoundingError;
    use rust_decimal::Decimal;

    #[test]
    fn test_create_from_valid_config() {
        let config = RounderConfig::new(1, vec![3, 5, 8]);
        let rounder = create_from_config(&config).unwrap();
        assert_eq!(rounder.precision(), 1);
        assert_eq!(rounder.allowed_digits().len(), 3);
        assert_eq!(
            rounder.round("12.62".parse::<Decimal>().unwrap()),
            "12.5".parse::<Decimal>().unwrap()
        );
    }

    #[test]
    fn test_create_from_invalid_config() {
        assert_eq!(
            create_from_config(&RounderConfig::new(1, vec![])).unwrap_err(),
            RoundingError::NoAllowedDigits
        );
        assert_eq!(
            create_from_config(&RounderConfig::new(1, vec![10])).unwrap_err(),
            RoundingError::InvalidDigit { value: 10 }
        );
    }
}
