// ============================================================================
// Locale Data
// Generated-style CLDR tables for the locales the crate is tested against
// ============================================================================
//
// Each accessor builds its record once and hands out shared references, so
// locale data behaves like the process-wide read-only registry it is in a
// full deployment. Patterns are stored the way the generator writes them:
// grouping metacharacters stripped, grouping sizes extracted.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use super::{FormatGroup, Locale, LocaleCurrency, NumberData, NumberFormat, Symbol};

fn format(pattern: &str, primary: usize, secondary: usize) -> NumberFormat {
    NumberFormat {
        standard_pattern: pattern.to_string(),
        primary_grouping_size: primary,
        secondary_grouping_size: secondary,
    }
}

fn named(entries: Vec<(&str, NumberFormat)>) -> FormatGroup {
    entries
        .into_iter()
        .map(|(name, format)| (name.to_string(), vec![format]))
        .collect()
}

fn for_system(system: &str, group: FormatGroup) -> HashMap<String, FormatGroup> {
    HashMap::from([(system.to_string(), group)])
}

fn symbols(system: &str, symbol: Symbol) -> HashMap<String, Symbol> {
    HashMap::from([(system.to_string(), symbol)])
}

fn currencies(entries: &[(&str, &str)]) -> HashMap<String, LocaleCurrency> {
    entries
        .iter()
        .map(|(code, symbol)| {
            (
                code.to_string(),
                LocaleCurrency {
                    symbol: symbol.to_string(),
                },
            )
        })
        .collect()
}

fn cached(cell: &'static OnceLock<Arc<Locale>>, build: fn() -> Locale) -> Arc<Locale> {
    cell.get_or_init(|| Arc::new(build())).clone()
}

/// The root locale every chain ends in.
pub fn root() -> Arc<Locale> {
    static CELL: OnceLock<Arc<Locale>> = OnceLock::new();
    cached(&CELL, || Locale {
        name: "root".to_string(),
        currencies: HashMap::new(),
        number: NumberData {
            symbols: symbols("latn", Symbol::default()),
            decimal_formats: for_system("latn", named(vec![("default", format("0.###", 3, 3))])),
            currency_formats: for_system(
                "latn",
                named(vec![("default_standard", format("¤\u{a0}0.00", 3, 3))]),
            ),
            percent_formats: for_system("latn", named(vec![("default", format("0%", 3, 3))])),
            default_numbering_system: "latn".to_string(),
            minimum_grouping_digits: 1,
        },
        parent: None,
    })
}

pub fn en() -> Arc<Locale> {
    static CELL: OnceLock<Arc<Locale>> = OnceLock::new();
    cached(&CELL, || Locale {
        name: "en".to_string(),
        currencies: currencies(&[
            ("USD", "$"),
            ("EUR", "€"),
            ("GBP", "£"),
            ("JPY", "¥"),
            ("KRW", "₩"),
            ("INR", "₹"),
        ]),
        number: NumberData {
            symbols: symbols("latn", Symbol::default()),
            decimal_formats: for_system("latn", named(vec![("default", format("0.###", 3, 3))])),
            currency_formats: for_system(
                "latn",
                named(vec![
                    ("default_standard", format("¤0.00", 3, 3)),
                    ("default_accounting", format("¤0.00;(¤0.00)", 3, 3)),
                ]),
            ),
            percent_formats: for_system("latn", named(vec![("default", format("0%", 3, 3))])),
            default_numbering_system: "latn".to_string(),
            minimum_grouping_digits: 1,
        },
        parent: Some(root()),
    })
}

/// CLDR considers en and en-US equivalent; the child carries no data.
pub fn en_us() -> Arc<Locale> {
    static CELL: OnceLock<Arc<Locale>> = OnceLock::new();
    cached(&CELL, || Locale {
        name: "en-US".to_string(),
        currencies: HashMap::new(),
        number: NumberData {
            default_numbering_system: "latn".to_string(),
            minimum_grouping_digits: 1,
            ..NumberData::default()
        },
        parent: Some(en()),
    })
}

pub fn en_nl() -> Arc<Locale> {
    static CELL: OnceLock<Arc<Locale>> = OnceLock::new();
    cached(&CELL, || Locale {
        name: "en-NL".to_string(),
        currencies: HashMap::new(),
        number: NumberData {
            symbols: symbols(
                "latn",
                Symbol {
                    decimal: ",".to_string(),
                    group: ".".to_string(),
                    ..Symbol::default()
                },
            ),
            default_numbering_system: "latn".to_string(),
            minimum_grouping_digits: 1,
            ..NumberData::default()
        },
        parent: Some(en()),
    })
}

pub fn de_at() -> Arc<Locale> {
    static CELL: OnceLock<Arc<Locale>> = OnceLock::new();
    cached(&CELL, || Locale {
        name: "de-AT".to_string(),
        currencies: currencies(&[("USD", "$"), ("EUR", "€")]),
        number: NumberData {
            symbols: symbols(
                "latn",
                Symbol {
                    decimal: ",".to_string(),
                    group: ".".to_string(),
                    ..Symbol::default()
                },
            ),
            decimal_formats: for_system("latn", named(vec![("default", format("0.###", 3, 3))])),
            currency_formats: for_system(
                "latn",
                named(vec![("default_standard", format("¤\u{a0}0.00", 3, 3))]),
            ),
            percent_formats: for_system("latn", named(vec![("default", format("0\u{a0}%", 3, 3))])),
            default_numbering_system: "latn".to_string(),
            minimum_grouping_digits: 1,
        },
        parent: Some(root()),
    })
}

pub fn de_ch() -> Arc<Locale> {
    static CELL: OnceLock<Arc<Locale>> = OnceLock::new();
    cached(&CELL, || Locale {
        name: "de-CH".to_string(),
        currencies: currencies(&[("USD", "$"), ("EUR", "€")]),
        number: NumberData {
            symbols: symbols(
                "latn",
                Symbol {
                    decimal: ".".to_string(),
                    group: "’".to_string(),
                    ..Symbol::default()
                },
            ),
            decimal_formats: for_system("latn", named(vec![("default", format("0.###", 3, 3))])),
            currency_formats: for_system(
                "latn",
                named(vec![(
                    "default_standard",
                    format("¤\u{a0}0.00;¤-0.00", 3, 3),
                )]),
            ),
            percent_formats: for_system("latn", named(vec![("default", format("0%", 3, 3))])),
            default_numbering_system: "latn".to_string(),
            minimum_grouping_digits: 1,
        },
        parent: Some(root()),
    })
}

pub fn es() -> Arc<Locale> {
    static CELL: OnceLock<Arc<Locale>> = OnceLock::new();
    cached(&CELL, || Locale {
        name: "es".to_string(),
        currencies: currencies(&[("USD", "US$"), ("EUR", "€")]),
        number: NumberData {
            symbols: symbols(
                "latn",
                Symbol {
                    decimal: ",".to_string(),
                    group: ".".to_string(),
                    ..Symbol::default()
                },
            ),
            decimal_formats: for_system("latn", named(vec![("default", format("0.###", 3, 3))])),
            currency_formats: for_system(
                "latn",
                named(vec![("default_standard", format("0.00\u{a0}¤", 3, 3))]),
            ),
            percent_formats: for_system("latn", named(vec![("default", format("0\u{a0}%", 3, 3))])),
            default_numbering_system: "latn".to_string(),
            // es only groups five or more integer digits.
            minimum_grouping_digits: 2,
        },
        parent: Some(root()),
    })
}

pub fn fr() -> Arc<Locale> {
    static CELL: OnceLock<Arc<Locale>> = OnceLock::new();
    cached(&CELL, || Locale {
        name: "fr".to_string(),
        currencies: currencies(&[("USD", "$US"), ("EUR", "€")]),
        number: NumberData {
            symbols: symbols(
                "latn",
                Symbol {
                    decimal: ",".to_string(),
                    group: "\u{202f}".to_string(),
                    currency_group: "\u{a0}".to_string(),
                    ..Symbol::default()
                },
            ),
            decimal_formats: for_system("latn", named(vec![("default", format("0.###", 3, 3))])),
            currency_formats: for_system(
                "latn",
                named(vec![("default_standard", format("0.00\u{a0}¤", 3, 3))]),
            ),
            percent_formats: for_system("latn", named(vec![("default", format("0\u{a0}%", 3, 3))])),
            default_numbering_system: "latn".to_string(),
            minimum_grouping_digits: 1,
        },
        parent: Some(root()),
    })
}

pub fn fr_fr() -> Arc<Locale> {
    static CELL: OnceLock<Arc<Locale>> = OnceLock::new();
    cached(&CELL, || Locale {
        name: "fr-FR".to_string(),
        currencies: HashMap::new(),
        number: NumberData {
            default_numbering_system: "latn".to_string(),
            minimum_grouping_digits: 1,
            ..NumberData::default()
        },
        parent: Some(fr()),
    })
}

/// hi groups with a 2-digit secondary size: 12,34,567.
pub fn hi() -> Arc<Locale> {
    static CELL: OnceLock<Arc<Locale>> = OnceLock::new();
    cached(&CELL, || Locale {
        name: "hi".to_string(),
        currencies: currencies(&[("USD", "$"), ("INR", "₹")]),
        number: NumberData {
            symbols: symbols("latn", Symbol::default()),
            decimal_formats: for_system("latn", named(vec![("default", format("0.###", 3, 2))])),
            currency_formats: for_system(
                "latn",
                named(vec![("default_standard", format("¤0.00", 3, 2))]),
            ),
            percent_formats: for_system("latn", named(vec![("default", format("0%", 3, 2))])),
            default_numbering_system: "latn".to_string(),
            minimum_grouping_digits: 1,
        },
        parent: Some(root()),
    })
}

pub fn sr() -> Arc<Locale> {
    static CELL: OnceLock<Arc<Locale>> = OnceLock::new();
    cached(&CELL, || Locale {
        name: "sr".to_string(),
        currencies: currencies(&[("USD", "US$"), ("EUR", "€")]),
        number: NumberData {
            symbols: symbols(
                "latn",
                Symbol {
                    decimal: ",".to_string(),
                    group: ".".to_string(),
                    ..Symbol::default()
                },
            ),
            decimal_formats: for_system("latn", named(vec![("default", format("0.###", 3, 3))])),
            currency_formats: for_system(
                "latn",
                named(vec![("default_standard", format("0.00\u{a0}¤", 3, 3))]),
            ),
            percent_formats: for_system("latn", named(vec![("default", format("0%", 3, 3))])),
            default_numbering_system: "latn".to_string(),
            minimum_grouping_digits: 1,
        },
        parent: Some(root()),
    })
}

/// ar renders digits in the arab numbering system.
pub fn ar() -> Arc<Locale> {
    static CELL: OnceLock<Arc<Locale>> = OnceLock::new();
    cached(&CELL, || Locale {
        name: "ar".to_string(),
        currencies: currencies(&[("USD", "US$"), ("EUR", "€")]),
        number: NumberData {
            symbols: symbols(
                "arab",
                Symbol {
                    decimal: "٫".to_string(),
                    group: "٬".to_string(),
                    percent_sign: "٪".to_string(),
                    ..Symbol::default()
                },
            ),
            decimal_formats: for_system("arab", named(vec![("default", format("0.###", 3, 3))])),
            currency_formats: for_system(
                "arab",
                named(vec![("default_standard", format("0.00\u{a0}¤", 3, 3))]),
            ),
            percent_formats: for_system("arab", named(vec![("default", format("0%", 3, 3))])),
            default_numbering_system: "arab".to_string(),
            minimum_grouping_digits: 1,
        },
        parent: Some(root()),
    })
}
