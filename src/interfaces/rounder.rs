// ============================================================================
// Rounder Interface
// Defines the contract for rounding strategies
// ============================================================================

use rust_decimal::Decimal;

/// Strategy pattern interface for rounders.
///
/// Implementations are immutable after construction and safe to share across
/// threads; `round` is a pure function of the input and the configuration.
pub trait Rounder: Send + Sync {
    /// Round a value according to the strategy's configuration.
    fn round(&self, value: Decimal) -> Decimal;

    /// Get the strategy name for logging/metrics
    fn name(&self) -> &str;
}
