// ============================================================================
// Storage Module
// Capability implementations for the native numeric primitives
// ============================================================================
//
// Nothing is exported from here: importing `crate::interfaces` is enough to
// use f32/f64 as FloatStorage and u8..u128/usize as UnsignedStorage.

mod float;
mod unsigned;
