// ============================================================================
// Locale Currency Library
// Exact decimal amounts with locale-aware CLDR-style formatting
// ============================================================================

//! # Locale Currency
//!
//! Exact decimal amounts tagged with a currency (or percent) unit, plus a
//! locale-aware formatter that renders them into CLDR-correct display
//! strings.
//!
//! ## Features
//!
//! - **Exact decimal arithmetic** with adaptive precision contexts and five
//!   rounding modes (including bankers' rounding)
//! - **ISO 4217 registry** of minor-unit digit counts and numeric codes
//! - **Immutable value semantics** safe for concurrent use across threads
//! - **Stable wire formats**: binary, JSON and PostgreSQL composite text
//! - **CLDR formatting**: grouping, accounting style, currency symbols,
//!   non-Latin digit transliteration
//!
//! ## Example
//!
//! ```rust
//! use locale_currency::prelude::*;
//! use locale_currency::locale::data;
//!
//! let price = Amount::currency("1234.59", "USD").unwrap();
//! let formatter = AmountFormatter::new(data::en());
//!
//! let options = FormattingOptions::default();
//! assert_eq!(formatter.format(&price, &options), "$1,234.59");
//!
//! let refund = price.mul("-1").unwrap();
//! let options = FormattingOptions {
//!     style: Style::Accounting,
//!     ..FormattingOptions::default()
//! };
//! assert_eq!(formatter.format(&refund, &options), "($1,234.59)");
//! ```

pub mod amount;
pub mod currency;
pub mod error;
pub mod format;
pub mod locale;
pub mod numeric;

// Re-exports for convenience
pub use amount::{Amount, Unit};
pub use currency::DEFAULT_DIGITS;
pub use error::{CurrencyError, CurrencyResult};
pub use format::{AmountFormatter, CurrencyDisplay, FormattingOptions, Style};
pub use numeric::RoundingMode;

pub mod prelude {
    pub use crate::amount::{Amount, Unit};
    pub use crate::currency::DEFAULT_DIGITS;
    pub use crate::error::{CurrencyError, CurrencyResult};
    pub use crate::format::{AmountFormatter, CurrencyDisplay, FormattingOptions, Style};
    pub use crate::locale::Locale;
    pub use crate::numeric::RoundingMode;
}

#[cfg(test)]
mod integration_tests {
    use super::locale::data;
    use super::prelude::*;

    #[test]
    fn test_cart_total_end_to_end() {
        // Three line items, a percentage discount, tax, then display.
        let unit_price = Amount::currency_from_i64(1099, "USD").unwrap();
        let line_total = unit_price.mul("3").unwrap();
        assert_eq!(line_total.to_string(), "32.97 USD");

        let discounted = line_total.sub(&line_total.mul("0.10").unwrap().round()).unwrap();
        assert_eq!(discounted.to_string(), "29.67 USD");

        let tax = discounted.mul("0.0825").unwrap().round();
        let total = discounted.add(&tax).unwrap();
        assert_eq!(total.to_string(), "32.12 USD");

        let en = AmountFormatter::new(data::en());
        assert_eq!(en.format(&total, &FormattingOptions::default()), "$32.12");

        let sr = AmountFormatter::new(data::sr());
        assert_eq!(
            sr.format(&total, &FormattingOptions::default()),
            "32,12\u{a0}US$"
        );
    }

    #[test]
    fn test_wire_round_trip_end_to_end() {
        let amount = Amount::currency("99.99", "EUR").unwrap();

        let binary = amount.to_binary();
        assert_eq!(Amount::from_binary(&binary).unwrap(), amount);

        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, r#"{"unit":1,"number":"99.99","code":"EUR"}"#);
        assert_eq!(serde_json::from_str::<Amount>(&json).unwrap(), amount);

        let composite = amount.to_composite();
        assert_eq!(composite, "(99.99,1,EUR)");
        assert_eq!(Amount::from_composite(&composite).unwrap(), amount);
    }

    #[test]
    fn test_string_round_trip_property() {
        // to_string(parse(n, c)) == n + " " + c for canonical inputs.
        for (n, code) in [("10.99", "USD"), ("0.001", "BHD"), ("50", "JPY")] {
            let amount = Amount::currency(n, code).unwrap();
            assert_eq!(amount.to_string(), format!("{} {}", n, code));
        }
    }

    #[test]
    fn test_shared_formatter_across_threads() {
        use std::sync::Arc;

        let formatter = Arc::new(AmountFormatter::new(data::en()));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let formatter = Arc::clone(&formatter);
                std::thread::spawn(move || {
                    let amount = Amount::currency_from_i64(1000 + i, "USD").unwrap();
                    formatter.format(&amount, &FormattingOptions::default())
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap().starts_with('$'));
        }
    }
}
