// ============================================================================
// Amount Formatter
// CLDR-style locale-aware rendering of amounts into display strings
// ============================================================================

use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::amount::{Amount, Unit};
use crate::currency::DEFAULT_DIGITS;
use crate::locale::{Locale, NumberFormat, Symbol};
use crate::numeric::{rounding_context, RoundingMode};

/// How the currency will be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurrencyDisplay {
    /// Show the currency symbol ("$").
    #[default]
    Symbol,
    /// Show the currency code ("USD").
    Code,
    /// Show nothing, hiding the currency.
    None,
}

/// Which currency pattern family to format with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// The standard currency pattern.
    #[default]
    Currency,
    /// The accounting pattern: negative amounts in parentheses. Falls back
    /// to the standard pattern for locales without one.
    Accounting,
}

/// Per-call formatting configuration, read once per `format` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattingOptions {
    /// Prefix non-negative amounts with the locale's plus sign.
    pub add_plus_sign: bool,
    pub style: Style,
    pub currency_display: CurrencyDisplay,
    /// How the amount is rounded to `max_digits`.
    pub rounding_mode: RoundingMode,
    /// Turns off grouping of major digits.
    pub no_grouping: bool,
    /// Minimum number of fraction digits. Zeros past the minimum are
    /// removed. `DEFAULT_DIGITS` means the currency's digit count.
    pub min_digits: u8,
    /// Maximum number of fraction digits; the amount is rounded to this
    /// count. Defaults to 6 so most amounts are shown as-is.
    pub max_digits: u8,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            add_plus_sign: false,
            style: Style::Currency,
            currency_display: CurrencyDisplay::Symbol,
            rounding_mode: RoundingMode::HalfUp,
            no_grouping: false,
            min_digits: DEFAULT_DIGITS,
            max_digits: 6,
        }
    }
}

/// Digit transliteration tables for non-Latin numbering systems.
static LOCAL_DIGITS: &[(&str, &str)] = &[
    ("arab", "٠١٢٣٤٥٦٧٨٩"),
    ("arabext", "۰۱۲۳۴۵۶۷۸۹"),
    ("beng", "০১২৩৪৫৬৭৮৯"),
    ("deva", "०१२३४५६७८९"),
    ("mymr", "၀၁၂၃၄၅၆၇၈၉"),
];

// ============================================================================
// Formatter
// ============================================================================

/// Formats amounts for one locale.
///
/// The formatter resolves its locale's symbol table and pattern groups once
/// at construction and is read-only afterwards, so it can be shared freely
/// across threads.
///
/// # Panics
/// Construction panics when the locale chain is missing its symbols, its
/// currency formats or its decimal formats; formatting a percent amount
/// panics when the chain has no percent formats. Both indicate a defective
/// locale-data build, not bad input.
pub struct AmountFormatter {
    locale: Arc<Locale>,
    symbol: Symbol,
    decimal_format: NumberFormat,
    currency_format: NumberFormat,
    accounting_format: Option<NumberFormat>,
    percent_format: Option<NumberFormat>,
    /// Custom symbols for individual currency codes. For example,
    /// "USD" -> "$" forces the plain dollar sign even where the locale
    /// renders "US$".
    symbol_map: HashMap<String, String>,
}

impl AmountFormatter {
    /// Creates a new formatter bound to the given locale.
    pub fn new(locale: Arc<Locale>) -> Self {
        let system = locale.number.default_numbering_system.clone();
        let symbol = locale
            .get_symbol(&system)
            .unwrap_or_else(|| panic!("unable to find symbols: {}", locale))
            .clone();
        let currency_format = locale
            .get_currency_formats(&system, "default_standard")
            .unwrap_or_else(|| panic!("unable to find default currency formats: {}", locale))[0]
            .clone();
        let decimal_format = locale
            .get_decimal_formats(&system, "default")
            .unwrap_or_else(|| panic!("unable to find default decimal formats: {}", locale))[0]
            .clone();
        let accounting_format = locale
            .get_currency_formats(&system, "default_accounting")
            .map(|formats| formats[0].clone());
        let percent_format = locale
            .get_percent_formats(&system, "default")
            .map(|formats| formats[0].clone());

        tracing::debug!(locale = %locale, system = %system, "resolved formatter locale data");

        Self {
            locale,
            symbol,
            decimal_format,
            currency_format,
            accounting_format,
            percent_format,
            symbol_map: HashMap::new(),
        }
    }

    /// Returns the bound locale.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Overrides the symbol used for a currency code, taking precedence
    /// over the locale chain.
    pub fn set_currency_symbol(&mut self, code: &str, symbol: &str) {
        self.symbol_map.insert(code.to_string(), symbol.to_string());
    }

    /// Formats an amount into a locale-correct display string.
    pub fn format(&self, amount: &Amount, options: &FormattingOptions) -> String {
        let format = self.select_format(amount, options);
        let pattern = select_pattern(format, amount, options);
        let number = self.format_number(amount, format, options);

        let mut out = substitute_number(&pattern, &number);
        out = out.replace('+', &self.symbol.plus_sign);
        out = out.replace('-', &self.symbol.minus_sign);

        match amount.unit() {
            Unit::Percent => out.replace('%', &self.symbol.percent_sign),
            Unit::Currency => {
                let glyph = self.currency_glyph(amount.code(), options);
                if glyph.is_empty() {
                    // Patterns keep a non-breaking space between the number
                    // and the currency; drop it together with the glyph.
                    out.replace("\u{a0}¤", "").replace("¤\u{a0}", "").replace('¤', "")
                } else {
                    out.replace('¤', &spaced_glyph(&pattern, glyph))
                }
            },
            Unit::None => out,
        }
    }

    // ========================================================================
    // Pattern and glyph selection
    // ========================================================================

    fn select_format(&self, amount: &Amount, options: &FormattingOptions) -> &NumberFormat {
        match amount.unit() {
            Unit::Percent => self
                .percent_format
                .as_ref()
                .unwrap_or_else(|| panic!("unable to find percent formats: {}", self.locale)),
            Unit::None => &self.decimal_format,
            Unit::Currency => match options.style {
                Style::Accounting => self.accounting_format.as_ref().unwrap_or(&self.currency_format),
                Style::Currency => &self.currency_format,
            },
        }
    }

    fn currency_glyph(&self, code: &str, options: &FormattingOptions) -> String {
        match options.currency_display {
            CurrencyDisplay::Symbol => match self.symbol_map.get(code) {
                Some(symbol) => symbol.clone(),
                None => self
                    .locale
                    .currency_symbol(code)
                    .unwrap_or(code)
                    .to_string(),
            },
            CurrencyDisplay::Code => code.to_string(),
            CurrencyDisplay::None => String::new(),
        }
    }

    // ========================================================================
    // Digit formatting
    // ========================================================================

    fn format_number(
        &self,
        amount: &Amount,
        format: &NumberFormat,
        options: &FormattingOptions,
    ) -> String {
        let mut min_digits = options.min_digits;
        if min_digits == DEFAULT_DIGITS {
            min_digits = amount.default_digits();
        }
        let mut max_digits = options.max_digits;
        if max_digits == DEFAULT_DIGITS {
            max_digits = amount.default_digits();
        }

        // The pattern supplies the visual sign; percent amounts scale first.
        let mut value = amount.decimal().abs();
        if amount.is_percent() {
            value *= Decimal::ONE_HUNDRED;
        }
        let ctx = rounding_context(&value, options.rounding_mode);
        let rounded = ctx.quantize(value, max_digits).to_string();

        let (major, minor) = match rounded.split_once('.') {
            Some((major, minor)) => (major.to_string(), minor.to_string()),
            None => (rounded, String::new()),
        };
        let major = self.group_major_digits(&major, amount, format, options);

        let mut minor = minor;
        if min_digits < max_digits {
            // Strip trailing zeros, then re-pad up to min_digits.
            while minor.ends_with('0') {
                minor.pop();
            }
            while minor.len() < min_digits as usize {
                minor.push('0');
            }
        }

        let mut formatted = major;
        if !minor.is_empty() {
            formatted.push_str(&self.symbol.decimal);
            formatted.push_str(&minor);
        }
        self.localize_digits(formatted)
    }

    /// Groups major digits from the right: the primary group first, then
    /// secondary-size groups.
    fn group_major_digits(
        &self,
        major: &str,
        amount: &Amount,
        format: &NumberFormat,
        options: &FormattingOptions,
    ) -> String {
        if options.no_grouping || format.primary_grouping_size == 0 {
            return major.to_string();
        }
        let num_digits = major.len();
        let min_digits = self.locale.number.minimum_grouping_digits as usize;
        let primary = format.primary_grouping_size;
        let secondary = if format.secondary_grouping_size == 0 {
            primary
        } else {
            format.secondary_grouping_size
        };
        if num_digits < min_digits + primary {
            return major.to_string();
        }

        let separator = if amount.is_currency() && !self.symbol.currency_group.is_empty() {
            &self.symbol.currency_group
        } else {
            &self.symbol.group
        };

        // Digit strings are ASCII here; localization runs afterwards.
        let mut groups = Vec::new();
        let mut end = num_digits - primary;
        groups.push(&major[end..]);
        while end > 0 {
            let start = end.saturating_sub(secondary);
            groups.push(&major[start..end]);
            end = start;
        }
        groups.reverse();
        groups.join(separator)
    }

    /// Replaces ASCII digits with their localized equivalents.
    fn localize_digits(&self, number: String) -> String {
        let system = &self.locale.number.default_numbering_system;
        if system == "latn" {
            return number;
        }
        let Some(digits) = LOCAL_DIGITS
            .iter()
            .find(|(name, _)| *name == system.as_str())
            .map(|(_, digits)| *digits)
        else {
            return number;
        };
        number
            .chars()
            .map(|c| match c.to_digit(10) {
                Some(d) => digits.chars().nth(d as usize).unwrap(),
                None => c,
            })
            .collect()
    }
}

// ============================================================================
// Pattern helpers
// ============================================================================

/// Picks the positive or negative sub-pattern for the amount.
///
/// Negative amounts use the explicit negative sub-pattern when the locale
/// has one (its sign glyphs come from the pattern itself), else a minus is
/// prefixed. `add_plus_sign` prefixes a plus to the positive sub-pattern.
fn select_pattern(format: &NumberFormat, amount: &Amount, options: &FormattingOptions) -> String {
    let mut parts = format.standard_pattern.splitn(2, ';');
    let positive = parts.next().unwrap_or_default();
    let negative = parts.next();

    if amount.is_negative() {
        match negative {
            Some(negative) => negative.to_string(),
            None => format!("-{}", positive),
        }
    } else if options.add_plus_sign {
        format!("+{}", positive)
    } else {
        positive.to_string()
    }
}

/// Replaces the number placeholder (the contiguous `0`/`#`/`.` run left by
/// the pattern generator) with the formatted number.
fn substitute_number(pattern: &str, number: &str) -> String {
    let bytes = pattern.as_bytes();
    let Some(start) = bytes.iter().position(|b| matches!(b, b'0' | b'#')) else {
        return pattern.to_string();
    };
    let mut end = start;
    while end < bytes.len() && matches!(bytes[end], b'0' | b'#' | b'.') {
        end += 1;
    }
    format!("{}{}{}", &pattern[..start], number, &pattern[end..])
}

/// CLDR requires a non-breaking space between the letters in a currency
/// symbol and adjacent digits.
fn spaced_glyph(pattern: &str, glyph: String) -> String {
    if pattern.contains("0¤") {
        if glyph.chars().next().is_some_and(char::is_alphabetic) {
            return format!("\u{a0}{}", glyph);
        }
    } else if pattern.contains("¤0") && glyph.chars().last().is_some_and(char::is_alphabetic) {
        return format!("{}\u{a0}", glyph);
    }
    glyph
}

// ============================================================================
// Tests
// ============================================================================
