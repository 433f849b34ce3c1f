// ============================================================================
// Domain Module
// Unit markers and their display labels
// ============================================================================

pub mod unit;

pub use unit::unit_name;
