// ============================================================================
// Constrained Rounder Library
// Decimal rounding with a restricted last-place digit alphabet
// ============================================================================

//! # Constrained Rounder
//!
//! Rounds decimal values to a target precision while constraining the
//! result's last significant digit to a caller-supplied set — for display and
//! pricing rules like "prices must end in 5 or 0".
//!
//! ## Features
//!
//! - **Exact decimal arithmetic** — distances and tie comparisons run on
//!   [`rust_decimal::Decimal`], so results stay correct at large magnitudes
//! - **Deterministic tie-break** — equidistant candidates resolve to the
//!   larger value, independent of digit-set order
//! - **Signed precision** — tenths, hundredths, and also tens, hundreds,
//!   millions via negative precision
//! - **Immutable, shareable rounders** — no interior state, safe to reuse
//!   across threads without coordination
//!
//! ## Example
//!
//! ```rust
//! use constrained_rounder::prelude::*;
//! use rust_decimal::Decimal;
//!
//! // Display prices round to tenths and must end in 3, 5, or 8.
//! let digits = [
//!     Digit::new(3).unwrap(),
//!     Digit::new(5).unwrap(),
//!     Digit::new(8).unwrap(),
//! ];
//! let rounder = ConstrainedRounder::new(1, &digits).unwrap();
//!
//! // 12.91 is closest to 12.8 among values ending in 3, 5, or 8
//! assert_eq!(rounder.round(Decimal::new(1291, 2)), Decimal::new(128, 1));
//! ```

pub mod domain;
pub mod interfaces;
pub mod numeric;
pub mod rounder;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Digit, RounderConfig};
    pub use crate::interfaces::Rounder;
    pub use crate::numeric::{RoundingError, RoundingResult};
    pub use crate::rounder::{create_from_config, ConstrainedRounder};
}
