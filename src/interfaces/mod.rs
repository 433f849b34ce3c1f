// ============================================================================
// Interfaces Module
// Numeric capability contracts implemented by storage types
// ============================================================================

mod float_storage;
mod unsigned_storage;

pub use float_storage::{BinaryInteger, FloatStorage};
pub use unsigned_storage::{FullWidthStorage, UnsignedStorage, Words};
