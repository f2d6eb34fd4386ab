// ============================================================================
// Domain Models Module
// Value objects and configuration for rounding rules
// ============================================================================

pub mod config;
pub mod digit;

pub use config::RounderConfig;
pub use digit::Digit;
