// ============================================================================
// Numeric Module
// Exact decimal substrate for the constrained rounding algorithm
// ============================================================================
//
// This module provides:
// - unit_for_precision: signed precision -> 10^(-precision) as a Decimal
// - round_to_step: half-away-from-zero rounding to a multiple of a step
// - RoundingError: error types for construction and boundary conversion
//
// Design principles:
// - All arithmetic runs on rust_decimal::Decimal, so difference and
//   tie comparisons are exact at every supported magnitude
// - Floats exist only at an explicit, validated API boundary
// - All validation returns Result; rounding itself never fails

mod errors;
mod scale;

pub use errors::{RoundingError, RoundingResult};
pub use scale::{round_to_step, unit_for_precision, MAX_PRECISION, MIN_PRECISION};
