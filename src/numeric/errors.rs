// ============================================================================
// Numeric Errors
// Error types for the reporting forms of tagged conversions and division
// ============================================================================

use std::fmt;

/// Errors reported by the fallible (non-trapping) tagged operations.
///
/// The trapping operators never return these; they fail exactly like the
/// storage type does. The `try_*`/`checked_*` variants report instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result does not fit the storage width
    Overflow,
    /// Attempted division by zero
    DivisionByZero,
    /// Integer source is not exactly representable in the storage type
    PrecisionLoss,
    /// Source value is NaN or infinite
    InvalidInput,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result does not fit the storage width")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: value is not exactly representable in the storage type"
            ),
            NumericError::InvalidInput => write!(f, "invalid input: value is NaN or infinite"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
