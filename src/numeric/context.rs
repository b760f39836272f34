// ============================================================================
// Decimal Contexts
// Precision selection and rounding rule plumbing for amount arithmetic
// ============================================================================

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{CurrencyError, CurrencyResult};

/// Determines how an amount will be rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundingMode {
    /// Rounds up if the next digit is >= 5.
    #[default]
    HalfUp,
    /// Rounds up if the next digit is > 5.
    HalfDown,
    /// Rounds away from 0.
    Up,
    /// Rounds towards 0, truncating extra digits.
    Down,
    /// Rounds up if the next digit is > 5. If the next digit is equal to 5,
    /// it rounds to the nearest even digit. Also called bankers' rounding.
    HalfEven,
}

impl RoundingMode {
    #[inline]
    pub(crate) fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfDown => RoundingStrategy::MidpointTowardZero,
            RoundingMode::Up => RoundingStrategy::AwayFromZero,
            RoundingMode::Down => RoundingStrategy::ToZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

// ============================================================================
// Contexts
// ============================================================================

/// Maximum fraction digits the representation supports.
const MAX_SCALE: u32 = 28;

/// A precision + rounding-rule bundle.
///
/// Every arithmetic operation goes through a context. Results wider than the
/// context precision are rounded back to it; narrower results pass through
/// untouched, so trailing zeros carried by operand scales survive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DecimalContext {
    precision: u32,
    rounding: RoundingMode,
}

/// Context for operands whose coefficients fit in 31 bits.
static SMALL_CONTEXT: DecimalContext = DecimalContext::new(19);

/// Full-width context for everything else.
static LARGE_CONTEXT: DecimalContext = DecimalContext::new(MAX_SCALE);

impl DecimalContext {
    const fn new(precision: u32) -> Self {
        // Base rounding is HalfUp, matching `Amount::round`.
        Self {
            precision,
            rounding: RoundingMode::HalfUp,
        }
    }

    /// Returns a copy with the rounding rule swapped. The shared base
    /// contexts are never mutated.
    #[inline]
    pub(crate) fn with_rounding(&self, mode: RoundingMode) -> Self {
        Self {
            rounding: mode,
            ..*self
        }
    }

    pub(crate) fn add(&self, a: Decimal, b: Decimal) -> CurrencyResult<Decimal> {
        a.checked_add(b)
            .map(|r| self.clamp(r))
            .ok_or_else(|| overflow(a, b, '+'))
    }

    pub(crate) fn sub(&self, a: Decimal, b: Decimal) -> CurrencyResult<Decimal> {
        a.checked_sub(b)
            .map(|r| self.clamp(r))
            .ok_or_else(|| overflow(a, b, '-'))
    }

    pub(crate) fn mul(&self, a: Decimal, b: Decimal) -> CurrencyResult<Decimal> {
        a.checked_mul(b)
            .map(|r| self.clamp(r))
            .ok_or_else(|| overflow(a, b, '*'))
    }

    /// Divides `a` by `b`. The caller must reject a zero divisor first.
    pub(crate) fn div(&self, a: Decimal, b: Decimal) -> CurrencyResult<Decimal> {
        a.checked_div(b)
            .map(|r| self.clamp(r))
            .ok_or_else(|| overflow(a, b, '/'))
    }

    /// Rounds `d` to the given number of fraction digits with this context's
    /// rounding rule, then pads with trailing zeros up to exactly `digits`.
    pub(crate) fn quantize(&self, d: Decimal, digits: u8) -> Decimal {
        let scale = (digits as u32).min(MAX_SCALE);
        let mut rounded = d.round_dp_with_strategy(scale, self.rounding.strategy());
        if rounded.scale() < scale {
            rounded.rescale(scale);
        }
        rounded
    }

    /// Rounds a result back to the context precision. No-op for results that
    /// already fit, so exactness never depends on which context was chosen.
    #[inline]
    fn clamp(&self, d: Decimal) -> Decimal {
        if significant_digits(d) > self.precision {
            d.round_sf_with_strategy(self.precision, self.rounding.strategy())
                .unwrap_or(d)
        } else {
            d
        }
    }
}

/// Returns the decimal context to use for a calculation.
///
/// Chooses between the 19-digit and the full-width context based on operand
/// coefficient size (> 31 bits), for increased performance.
pub(crate) fn context_for(operands: &[&Decimal]) -> &'static DecimalContext {
    for d in operands {
        if d.mantissa().unsigned_abs() >> 31 != 0 {
            return &LARGE_CONTEXT;
        }
    }
    &SMALL_CONTEXT
}

/// Returns the decimal context to use for rounding.
///
/// The most common HalfUp mode reuses the preallocated base context; other
/// modes get a copy with the rounding rule swapped.
pub(crate) fn rounding_context(operand: &Decimal, mode: RoundingMode) -> DecimalContext {
    let base = context_for(&[operand]);
    if mode == RoundingMode::HalfUp {
        *base
    } else {
        base.with_rounding(mode)
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parses a numeric string strictly.
///
/// Accepts an optional sign, decimal digits and at most one decimal point.
/// Anything else fails with `InvalidNumber` carrying the rejected input.
pub(crate) fn parse(n: &str) -> CurrencyResult<Decimal> {
    n.parse::<Decimal>()
        .map_err(|_| CurrencyError::InvalidNumber(n.to_string()))
}

fn overflow(a: Decimal, b: Decimal, op: char) -> CurrencyError {
    CurrencyError::Overflow(format!("{} {} {}", a, op, b))
}

fn significant_digits(d: Decimal) -> u32 {
    let mut coeff = d.mantissa().unsigned_abs();
    let mut digits = 1;
    while coeff >= 10 {
        coeff /= 10;
        digits += 1;
    }
    digits
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        parse(s).unwrap()
    }

    #[test]
    fn test_parse_strict() {
        assert_eq!(dec("12.345").to_string(), "12.345");
        assert_eq!(dec("-0.001").to_string(), "-0.001");
        assert_eq!(dec("3.50").to_string(), "3.50");

        for bad in ["INVALID", "", "3,60", "1.2.3", "12 "] {
            assert_eq!(
                parse(bad),
                Err(CurrencyError::InvalidNumber(bad.to_string()))
            );
        }
    }

    #[test]
    fn test_context_selection() {
        // 2^31 - 1 fits in 31 bits, 2^31 does not.
        let small = dec("2147483647");
        let large = dec("2147483648");

        assert_eq!(context_for(&[&small]), &SMALL_CONTEXT);
        assert_eq!(context_for(&[&large]), &LARGE_CONTEXT);
        assert_eq!(context_for(&[&small, &large]), &LARGE_CONTEXT);

        // The scale does not matter, only the coefficient width.
        let small_scaled = dec("21474.83647");
        assert_eq!(context_for(&[&small_scaled]), &SMALL_CONTEXT);
    }

    #[test]
    fn test_context_choice_does_not_change_results() {
        // The precision selection is a performance optimization only; for
        // operands the small context accepts, both contexts must agree.
        let pairs = [
            ("20.99", "3.50"),
            ("0.0001", "123456.789"),
            ("-2147483.647", "2147483.647"),
        ];
        type BinOp = fn(&DecimalContext, Decimal, Decimal) -> CurrencyResult<Decimal>;
        let ops: [BinOp; 3] = [DecimalContext::add, DecimalContext::sub, DecimalContext::mul];
        for (a, b) in pairs {
            let (a, b) = (dec(a), dec(b));
            for op in ops {
                assert_eq!(
                    op(&SMALL_CONTEXT, a, b).unwrap(),
                    op(&LARGE_CONTEXT, a, b).unwrap()
                );
            }
            // Terminating division agrees as well.
            assert_eq!(
                SMALL_CONTEXT.div(dec("99.99"), dec("3")).unwrap(),
                LARGE_CONTEXT.div(dec("99.99"), dec("3")).unwrap()
            );
        }
    }

    #[test]
    fn test_small_context_rounds_wide_quotients() {
        // 10 / 3 does not terminate; the small context keeps 19 significant
        // digits, the large context keeps the full width.
        let q19 = SMALL_CONTEXT.div(dec("10"), dec("3")).unwrap();
        assert_eq!(q19.to_string(), "3.333333333333333333");

        let q39 = LARGE_CONTEXT.div(dec("10"), dec("3")).unwrap();
        assert!(q39.to_string().len() > q19.to_string().len());
    }

    #[test]
    fn test_with_rounding_copies() {
        let halfeven = SMALL_CONTEXT.with_rounding(RoundingMode::HalfEven);
        assert_eq!(halfeven.rounding, RoundingMode::HalfEven);
        // The shared base context is untouched.
        assert_eq!(SMALL_CONTEXT.rounding, RoundingMode::HalfUp);
    }

    #[test]
    fn test_rounding_context_reuses_base_for_half_up() {
        let d = dec("10.99");
        assert_eq!(rounding_context(&d, RoundingMode::HalfUp), SMALL_CONTEXT);
        assert_eq!(
            rounding_context(&d, RoundingMode::Down),
            SMALL_CONTEXT.with_rounding(RoundingMode::Down)
        );
    }

    #[test]
    fn test_quantize_pads_trailing_zeros() {
        let ctx = rounding_context(&dec("12.345"), RoundingMode::HalfUp);
        assert_eq!(ctx.quantize(dec("12.345"), 4).to_string(), "12.3450");
        assert_eq!(ctx.quantize(dec("12.345"), 3).to_string(), "12.345");
        assert_eq!(ctx.quantize(dec("12.345"), 2).to_string(), "12.35");
        assert_eq!(ctx.quantize(dec("50"), 2).to_string(), "50.00");
    }

    #[test]
    fn test_quantize_rounding_modes() {
        let cases = [
            (RoundingMode::HalfUp, "12.345", "12.35"),
            (RoundingMode::HalfDown, "12.345", "12.34"),
            (RoundingMode::Up, "12.343", "12.35"),
            (RoundingMode::Down, "12.347", "12.34"),
            (RoundingMode::HalfEven, "12.345", "12.34"),
            (RoundingMode::HalfEven, "12.335", "12.34"),
        ];
        for (mode, input, want) in cases {
            let d = dec(input);
            let ctx = rounding_context(&d, mode);
            assert_eq!(ctx.quantize(d, 2).to_string(), want, "{:?} {}", mode, input);
        }
    }

    #[test]
    fn test_mul_keeps_scale() {
        // Exact products keep the combined scale of their operands.
        let p = SMALL_CONTEXT.mul(dec("20.99"), dec("0.20")).unwrap();
        assert_eq!(p.to_string(), "4.1980");
    }

    #[test]
    fn test_wide_operands_stay_exact() {
        // i64::MAX has a 63-bit coefficient and routes to the full-width
        // context, so nothing is rounded away.
        let a = dec("9223372036854775807");
        let b = dec("20.99");
        let ctx = context_for(&[&a, &b]);
        assert_eq!(
            ctx.add(a, b).unwrap().to_string(),
            "9223372036854775827.99"
        );
    }
}
