// ============================================================================
// Currency Errors
// Error types for amount construction, arithmetic and wire decoding
// ============================================================================

use std::fmt;

use crate::amount::Amount;

/// Errors that can occur when constructing, combining or decoding amounts.
///
/// All variants are recoverable, value-carrying errors. A missing locale
/// pattern is a configuration defect and panics instead (see
/// [`AmountFormatter`](crate::format::AmountFormatter)).
#[derive(Debug, Clone, PartialEq)]
pub enum CurrencyError {
    /// A numeric string could not be parsed as a decimal, or a division
    /// operand parsed to zero.
    InvalidNumber(String),
    /// A currency code is not a known ISO 4217 code, or a wire format
    /// carried a malformed or truncated code field.
    InvalidCurrencyCode(String),
    /// Two amounts with different units or currency codes were combined.
    /// Carries both operands unchanged.
    Mismatch { a: Amount, b: Amount },
    /// A value exceeded the representable range, e.g. when narrowing minor
    /// units to an `i64`.
    Overflow(String),
}

impl fmt::Display for CurrencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyError::InvalidNumber(number) => {
                write!(f, "invalid number {:?}", number)
            },
            CurrencyError::InvalidCurrencyCode(code) => {
                write!(f, "invalid currency code {:?}", code)
            },
            CurrencyError::Mismatch { a, b } => write!(
                f,
                "amounts \"{}\" and \"{}\" have mismatched currency codes",
                a, b
            ),
            CurrencyError::Overflow(number) => {
                write!(f, "number {:?} overflows the supported range", number)
            },
        }
    }
}

impl std::error::Error for CurrencyError {}

/// Result type alias for amount operations
pub type CurrencyResult<T> = Result<T, CurrencyError>;
