// ============================================================================
// Currency Registry
// Static ISO 4217 metadata: numeric codes and minor-unit digit counts
// ============================================================================

mod data;

use data::CURRENCIES;

/// Placeholder for each currency's number of fraction digits.
///
/// Passing this sentinel to [`Amount::round_to`](crate::amount::Amount) or
/// the formatter digit options substitutes the currency's own digit count
/// (or 2 for amounts without a currency).
pub const DEFAULT_DIGITS: u8 = 255;

/// Static metadata for one ISO 4217 currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    /// Three-digit ISO numeric code, e.g. "840" for USD.
    pub numeric: &'static str,
    /// Number of minor-unit digits, e.g. 2 for USD, 0 for JPY, 3 for BHD.
    pub digits: u8,
}

#[inline]
fn lookup(code: &str) -> Option<&'static CurrencyInfo> {
    CURRENCIES
        .binary_search_by(|(c, _)| c.cmp(&code))
        .ok()
        .map(|i| &CURRENCIES[i].1)
}

/// Checks whether a currency code is valid.
///
/// An empty currency code is considered valid.
pub fn is_valid(code: &str) -> bool {
    code.is_empty() || lookup(code).is_some()
}

/// Returns the number of fraction digits for a currency code.
///
/// A lookup failure is distinct from a zero digit count (e.g. JPY).
pub fn digits_for(code: &str) -> Option<u8> {
    lookup(code).map(|info| info.digits)
}

/// Returns the ISO numeric code for a currency code.
///
/// Callers that need a value for unknown codes fall back to `"000"`.
pub fn numeric_code_for(code: &str) -> Option<&'static str> {
    lookup(code).map(|info| info.numeric)
}
