// ============================================================================
// Tagged Numeric Library
// Zero-cost unit tags for floating-point and unsigned integer values
// ============================================================================

//! # Tagged Numeric
//!
//! Numeric wrappers that carry a unit in their type and nowhere else.
//!
//! ## Features
//!
//! - **`TaggedFloat<S, U>`** forwards the binary floating-point protocol of
//!   `S` (`f32`, `f64`): arithmetic, rounding rules, classification,
//!   IEEE-754 field decomposition, remainder, square root, fused multiply-add
//! - **`TaggedUnsigned<S, U>`** forwards the fixed-width unsigned protocol of
//!   `S` (`u8`..`u128`, `usize`): arithmetic, overflow-reporting arithmetic,
//!   full-width multiply/divide, bit counting, byte swapping, machine words
//! - **Compile-time partition**: values with different units never combine
//! - **Zero cost**: `#[repr(transparent)]`, the unit is a `PhantomData`
//!
//! ## Example
//!
//! ```rust
//! use tagged_numeric::prelude::*;
//!
//! declare_units!(Celsius, Bytes);
//!
//! let reading = TaggedFloat::<f64, Celsius>::new(21.5);
//! let offset = TaggedFloat::<f64, Celsius>::new(0.25);
//! assert_eq!((reading + offset).get(), 21.75);
//!
//! let payload = TaggedUnsigned::<u32, Bytes>::new(0x0000_0001);
//! assert_eq!(payload.byte_swapped().get(), 0x0100_0000);
//!
//! let wrapped = TaggedUnsigned::<u8, Bytes>::new(200)
//!     .adding_reporting_overflow(TaggedUnsigned::new(100));
//! assert_eq!((wrapped.partial_value.get(), wrapped.overflow), (44, true));
//! ```

pub mod domain;
pub mod interfaces;
pub mod numeric;
mod storage;

// Re-exports for convenience
pub mod prelude {
    pub use crate::declare_units;
    pub use crate::domain::unit_name;
    pub use crate::interfaces::{BinaryInteger, FloatStorage, FullWidthStorage, UnsignedStorage};
    pub use crate::numeric::{
        FloatSign, FullWidth, NumericError, NumericResult, QuotientAndRemainder,
        ReportingOverflow, RoundingRule, TaggedFloat, TaggedUnsigned,
    };
}
