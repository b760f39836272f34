// ============================================================================
// Locale Currency Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Arithmetic - Amount add/mul/div through the precision contexts
// 2. Rounding - All rounding modes at currency digit counts
// 3. Formatting - End-to-end locale formatting, grouped and localized
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use locale_currency::locale::data;
use locale_currency::prelude::*;

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn benchmark_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("amount_arithmetic");

    // Small coefficients hit the 19-digit context, wide ones the full-width
    // context.
    for (label, number) in [("small", "1234.59"), ("wide", "9223372036854775807.99")] {
        let a = Amount::currency(number, "USD").unwrap();
        let b = Amount::currency("0.01", "USD").unwrap();

        group.bench_with_input(BenchmarkId::new("add", label), &a, |bench, a| {
            bench.iter(|| black_box(a.add(&b).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("mul", label), &a, |bench, a| {
            bench.iter(|| black_box(a.mul("1.0825").unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("div", label), &a, |bench, a| {
            bench.iter(|| black_box(a.div("3").unwrap()));
        });
    }

    group.finish();
}

// ============================================================================
// Rounding Benchmarks
// ============================================================================

fn benchmark_rounding(c: &mut Criterion) {
    let mut group = c.benchmark_group("amount_rounding");
    let amount = Amount::currency("1234.56789", "USD").unwrap();

    for (label, mode) in [
        ("half_up", RoundingMode::HalfUp),
        ("half_down", RoundingMode::HalfDown),
        ("up", RoundingMode::Up),
        ("down", RoundingMode::Down),
        ("half_even", RoundingMode::HalfEven),
    ] {
        group.bench_function(label, |bench| {
            bench.iter(|| black_box(amount.round_to(2, mode)));
        });
    }

    group.finish();
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn benchmark_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("amount_formatting");
    let amount = Amount::currency("12345678.90", "USD").unwrap();
    let options = FormattingOptions::default();

    for (label, locale) in [
        ("en", data::en()),
        ("hi", data::hi()),
        ("sr", data::sr()),
        ("ar", data::ar()),
    ] {
        let formatter = AmountFormatter::new(locale);
        group.bench_function(label, |bench| {
            bench.iter(|| black_box(formatter.format(&amount, &options)));
        });
    }

    // Formatter construction resolves the locale chain once.
    group.bench_function("formatter_new", |bench| {
        bench.iter(|| black_box(AmountFormatter::new(data::en())));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_arithmetic,
    benchmark_rounding,
    benchmark_formatting
);
criterion_main!(benches);
