// ============================================================================
// Rounder Module
// Contains the core rounding business logic
// ============================================================================

mod constrained;

pub mod factory;

pub use constrained::ConstrainedRounder;
pub use factory::create_from_config;
