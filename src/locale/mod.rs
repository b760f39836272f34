// ============================================================================
// Locale Data Model
// Parent-linked locale records consumed (never built) by the formatter
// ============================================================================
//
// Locales form a parent-linked tree (fr-CA -> fr -> root). Every lookup
// falls back to the parent chain on miss, walked iteratively. The records
// are produced offline by a CLDR generator and are read-only at runtime;
// `data` ships a compact set of generated-style tables for tests and demos.

pub mod data;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Number symbols for one numbering system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub minus_sign: String,
    pub plus_sign: String,
    pub decimal: String,
    pub group: String,
    /// Group separator used for currency amounts. Empty means "use `group`".
    pub currency_group: String,
    pub percent_sign: String,
}

impl Default for Symbol {
    /// CLDR root symbols.
    fn default() -> Self {
        Self {
            minus_sign: "-".to_string(),
            plus_sign: "+".to_string(),
            decimal: ".".to_string(),
            group: ",".to_string(),
            currency_group: String::new(),
            percent_sign: "%".to_string(),
        }
    }
}

/// One number format, with the grouping information the generator extracted
/// from the raw CLDR pattern.
///
/// `standard_pattern` is stored with the grouping metacharacters already
/// stripped: `¤#,##0.00` becomes `¤0.00`, `#,##,##0.###` becomes `0.###`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    pub standard_pattern: String,
    pub primary_grouping_size: usize,
    pub secondary_grouping_size: usize,
}

/// Named format lists, e.g. `default_standard` and `default_accounting`.
pub type FormatGroup = HashMap<String, Vec<NumberFormat>>;

/// Number-related locale data, keyed by numbering system where applicable.
#[derive(Debug, Clone, Default)]
pub struct NumberData {
    pub symbols: HashMap<String, Symbol>,
    pub decimal_formats: HashMap<String, FormatGroup>,
    pub currency_formats: HashMap<String, FormatGroup>,
    pub percent_formats: HashMap<String, FormatGroup>,
    pub default_numbering_system: String,
    pub minimum_grouping_digits: u8,
}

/// Per-locale currency display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleCurrency {
    /// Localized symbol, e.g. `$` in en but `US$` in sr. Empty means
    /// "ask the parent".
    pub symbol: String,
}

/// A node in the locale tree.
#[derive(Debug, Clone, Default)]
pub struct Locale {
    pub name: String,
    pub currencies: HashMap<String, LocaleCurrency>,
    pub number: NumberData,
    pub parent: Option<Arc<Locale>>,
}

impl Locale {
    /// Returns the symbols for a numbering system, walking up the parent
    /// chain on miss.
    pub fn get_symbol(&self, system: &str) -> Option<&Symbol> {
        let mut locale = self;
        loop {
            if let Some(symbol) = locale.number.symbols.get(system) {
                return Some(symbol);
            }
            locale = locale.parent.as_deref()?;
        }
    }

    /// Returns the named decimal formats for a numbering system, walking up
    /// the parent chain until a non-empty list is found.
    pub fn get_decimal_formats(&self, system: &str, name: &str) -> Option<&[NumberFormat]> {
        self.get_formats(|number| &number.decimal_formats, system, name)
    }

    /// Like [`get_decimal_formats`](Self::get_decimal_formats), for the
    /// currency format group.
    pub fn get_currency_formats(&self, system: &str, name: &str) -> Option<&[NumberFormat]> {
        self.get_formats(|number| &number.currency_formats, system, name)
    }

    /// Like [`get_decimal_formats`](Self::get_decimal_formats), for the
    /// percent format group.
    pub fn get_percent_formats(&self, system: &str, name: &str) -> Option<&[NumberFormat]> {
        self.get_formats(|number| &number.percent_formats, system, name)
    }

    /// Returns the localized symbol for a currency code, walking up the
    /// parent chain past empty entries. `None` at the end of the chain; the
    /// caller falls back to the code itself.
    pub fn currency_symbol(&self, code: &str) -> Option<&str> {
        let mut locale = self;
        loop {
            if let Some(entry) = locale.currencies.get(code) {
                if !entry.symbol.is_empty() {
                    return Some(&entry.symbol);
                }
            }
            locale = locale.parent.as_deref()?;
        }
    }

    fn get_formats(
        &self,
        select: fn(&NumberData) -> &HashMap<String, FormatGroup>,
        system: &str,
        name: &str,
    ) -> Option<&[NumberFormat]> {
        let mut locale = self;
        loop {
            if let Some(formats) = select(&locale.number)
                .get(system)
                .and_then(|group| group.get(name))
            {
                if !formats.is_empty() {
                    return Some(formats.as_slice());
                }
            }
            locale = locale.parent.as_deref()?;
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
