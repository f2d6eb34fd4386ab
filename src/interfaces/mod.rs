// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod rounder;

pub use rounder::Rounder;
