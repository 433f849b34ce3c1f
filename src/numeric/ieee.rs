// ============================================================================
// IEEE-754 Vocabulary
// Sign and rounding-rule types shared by floating-point storage and wrappers
// ============================================================================

use std::fmt;

/// The sign of a floating-point value, including zeros and NaNs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatSign {
    /// Sign bit clear
    Plus,
    /// Sign bit set
    Minus,
}

impl fmt::Display for FloatSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloatSign::Plus => write!(f, "+"),
            FloatSign::Minus => write!(f, "-"),
        }
    }
}

/// Rule used when rounding a floating-point value to an integral value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundingRule {
    /// Nearest integral value; ties go away from zero (schoolbook rounding)
    #[default]
    ToNearestOrAwayFromZero,
    /// Nearest integral value; ties go to the even neighbour
    ToNearestOrEven,
    /// Closest integral value greater than or equal to the source (ceiling)
    Up,
    /// Closest integral value less than or equal to the source (floor)
    Down,
    /// Closest integral value whose magnitude is not greater (truncation)
    TowardZero,
    /// Closest integral value whose magnitude is not smaller
    AwayFromZero,
}
