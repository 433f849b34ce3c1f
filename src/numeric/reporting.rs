// ============================================================================
// Reporting Results
// Value pairs returned by overflow-reporting and full-width operations
// ============================================================================

/// Result of an overflow-reporting operation.
///
/// `partial_value` is the result wrapped modulo `2^BIT_WIDTH`; `overflow` is
/// set when the storage type reports overflow for the same operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReportingOverflow<T> {
    pub partial_value: T,
    pub overflow: bool,
}

impl<T> ReportingOverflow<T> {
    #[inline]
    pub const fn new(partial_value: T, overflow: bool) -> Self {
        Self {
            partial_value,
            overflow,
        }
    }
}

impl<T> From<ReportingOverflow<T>> for (T, bool) {
    #[inline]
    fn from(result: ReportingOverflow<T>) -> Self {
        (result.partial_value, result.overflow)
    }
}

/// Double-width value split into a high and a low half.
///
/// The wrappers keep the high half unit-tagged and hand back the low half as
/// the plain storage magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FullWidth<H, L> {
    pub high: H,
    pub low: L,
}

impl<H, L> FullWidth<H, L> {
    #[inline]
    pub const fn new(high: H, low: L) -> Self {
        Self { high, low }
    }
}

impl<H, L> From<(H, L)> for FullWidth<H, L> {
    #[inline]
    fn from((high, low): (H, L)) -> Self {
        Self { high, low }
    }
}

/// Quotient and remainder of a full-width division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuotientAndRemainder<T> {
    pub quotient: T,
    pub remainder: T,
}

impl<T> From<QuotientAndRemainder<T>> for (T, T) {
    #[inline]
    fn from(result: QuotientAndRemainder<T>) -> Self {
        (result.quotient, result.remainder)
    }
}
