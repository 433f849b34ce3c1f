// ============================================================================
// Unit Markers
// Compile-time tags that partition otherwise identical numeric values
// ============================================================================

//! A unit is any type used as the second parameter of `TaggedFloat` or
//! `TaggedUnsigned`. It is never instantiated and needs no trait impls;
//! an uninhabited enum per unit is the usual choice:
//!
//! ```rust
//! use tagged_numeric::declare_units;
//! use tagged_numeric::numeric::TaggedFloat;
//!
//! declare_units! {
//!     /// Temperature in degrees Celsius
//!     pub Celsius,
//!     pub Kelvin,
//! }
//!
//! let a = TaggedFloat::<f64, Celsius>::new(20.5);
//! let b = TaggedFloat::<f64, Celsius>::new(1.5);
//! assert_eq!((a + b).get(), 22.0);
//! ```
//!
//! Values with different units do not combine:
//!
//! ```compile_fail
//! use tagged_numeric::declare_units;
//! use tagged_numeric::numeric::TaggedFloat;
//!
//! declare_units!(Celsius, Kelvin);
//!
//! let a = TaggedFloat::<f64, Celsius>::new(20.5);
//! let b = TaggedFloat::<f64, Kelvin>::new(293.65);
//! let _ = a + b;
//! ```
//!
//! ```compile_fail
//! use tagged_numeric::declare_units;
//! use tagged_numeric::numeric::TaggedUnsigned;
//!
//! declare_units!(Bytes, Packets);
//!
//! let a = TaggedUnsigned::<u32, Bytes>::new(1500);
//! let b = TaggedUnsigned::<u32, Packets>::new(1);
//! let _ = a < b;
//! ```
//!
//! Neither do values with the same unit and different storage:
//!
//! ```compile_fail
//! use tagged_numeric::declare_units;
//! use tagged_numeric::numeric::TaggedFloat;
//!
//! declare_units!(Meters);
//!
//! let a = TaggedFloat::<f64, Meters>::new(1.0);
//! let b = TaggedFloat::<f32, Meters>::new(1.0);
//! let _ = a.is_equal(b);
//! ```

/// Declare uninhabited unit marker types.
///
/// Each entry becomes `enum Name {}` deriving `Debug`. Attributes and
/// visibility are passed through.
#[macro_export]
macro_rules! declare_units {
    ($($(#[$meta:meta])* $vis:vis $name:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug)]
            $vis enum $name {}
        )+
    };
}

/// Display label of a unit type: its name without the module path.
///
/// Generic arguments are kept as `type_name` reports them. Intended for
/// diagnostics only; the exact text is not stable across compiler versions.
pub fn unit_name<U: ?Sized>() -> &'static str {
    let full = std::any::type_name::<U>();
    let path_end = full.find('<').unwrap_or(full.len());
    match full[..path_end].rfind("::") {
        Some(separator) => &full[separator + 2..],
        None => full,
    }
}
