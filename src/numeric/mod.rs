// ============================================================================
// Numeric Module
// Unit-tagged numeric wrappers with zero runtime representation cost
// ============================================================================
//
// This module provides:
// - TaggedFloat<S, U>: binary floating-point storage S tagged with unit U
// - TaggedUnsigned<S, U>: unsigned fixed-width storage S tagged with unit U
// - FloatSign / RoundingRule: IEEE-754 vocabulary used by TaggedFloat
// - ReportingOverflow / FullWidth / QuotientAndRemainder: reporting results
// - NumericError: errors of the reporting (try_/checked_) variants
//
// Design principles:
// - Every operation forwards to the storage type; nothing is recomputed
// - Mixing units is a compile error, never a runtime check
// - #[repr(transparent)]: a tagged value has the layout of its storage

mod errors;
mod ieee;
mod reporting;
mod tagged_float;
mod tagged_unsigned;

pub use errors::{NumericError, NumericResult};
pub use ieee::{FloatSign, RoundingRule};
pub use reporting::{FullWidth, QuotientAndRemainder, ReportingOverflow};
pub use tagged_float::TaggedFloat;
pub use tagged_unsigned::TaggedUnsigned;
