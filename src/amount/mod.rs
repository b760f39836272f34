// ============================================================================
// Amount Value Type
// Exact decimal amounts tagged with a unit and an optional currency code
// ============================================================================

mod codec;

use std::cmp::Ordering;
use std::fmt;

use arrayvec::ArrayString;
use rust_decimal::Decimal;

use crate::currency::{self, DEFAULT_DIGITS};
use crate::error::{CurrencyError, CurrencyResult};
use crate::numeric::{self, context_for, rounding_context, RoundingMode};

/// Fixed-capacity storage for a 3-letter currency code (or the empty code).
pub(crate) type Code = ArrayString<3>;

// ============================================================================
// Unit
// ============================================================================

/// The measurement unit attached to an amount.
///
/// The unit decides the `Display` suffix and which pattern family the
/// formatter selects. Wire formats encode it as 0/1/2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Unit {
    /// A plain number without a unit.
    #[default]
    None,
    /// A monetary amount in the currency named by the amount's code.
    Currency,
    /// A percentage. Multiplied by 100 when formatted.
    Percent,
}

impl Unit {
    /// Stable wire value used by the binary, JSON and composite codecs.
    #[inline]
    pub(crate) fn wire_value(self) -> u8 {
        match self {
            Unit::None => 0,
            Unit::Currency => 1,
            Unit::Percent => 2,
        }
    }

    #[inline]
    pub(crate) fn from_wire(value: u8) -> Option<Self> {
        match value {
            0 => Some(Unit::None),
            1 => Some(Unit::Currency),
            2 => Some(Unit::Percent),
            _ => None,
        }
    }
}

// ============================================================================
// Amount
// ============================================================================

/// A decimal number with its unit and currency code.
///
/// Amounts are immutable values: every operation returns a new `Amount` and
/// never mutates its operands, so shared amounts can be used freely across
/// threads.
///
/// # Example
/// ```
/// use locale_currency::Amount;
///
/// let price = Amount::currency("20.99", "USD")?;
/// let tax = price.mul("0.0825")?.round();
/// let total = price.add(&tax)?;
/// assert_eq!(total.to_string(), "22.72 USD");
/// # Ok::<(), locale_currency::CurrencyError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Amount {
    number: Decimal,
    code: Code,
    unit: Unit,
}

impl Amount {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Creates a currency amount from a numeric string and a currency code.
    ///
    /// # Errors
    /// `InvalidNumber` if the number does not parse, `InvalidCurrencyCode`
    /// if the code is empty or not a known ISO 4217 code.
    pub fn currency(n: &str, code: &str) -> CurrencyResult<Self> {
        let number = numeric::parse(n)?;
        if code.is_empty() || !currency::is_valid(code) {
            return Err(CurrencyError::InvalidCurrencyCode(code.to_string()));
        }
        Ok(Self::from_parts(number, code, Unit::Currency))
    }

    /// Creates a currency amount from an integer count of minor units.
    ///
    /// The integer is scaled by the currency's digit count, so
    /// `currency_from_i128(2099, "USD")` is `20.99 USD` while
    /// `currency_from_i128(50, "JPY")` is `50 JPY`.
    pub fn currency_from_i128(n: i128, code: &str) -> CurrencyResult<Self> {
        let digits = currency::digits_for(code)
            .ok_or_else(|| CurrencyError::InvalidCurrencyCode(code.to_string()))?;
        let number = Decimal::try_from_i128_with_scale(n, digits as u32)
            .map_err(|_| CurrencyError::Overflow(n.to_string()))?;
        Ok(Self::from_parts(number, code, Unit::Currency))
    }

    /// Creates a currency amount from an `i64` count of minor units.
    pub fn currency_from_i64(n: i64, code: &str) -> CurrencyResult<Self> {
        Self::currency_from_i128(n as i128, code)
    }

    /// Creates a plain number amount without a currency.
    pub fn new(n: &str) -> CurrencyResult<Self> {
        Ok(Self::from_parts(numeric::parse(n)?, "", Unit::None))
    }

    /// Creates a plain number amount from an integer count of minor units,
    /// interpreted with the default scale of 2.
    pub fn from_i128(n: i128) -> CurrencyResult<Self> {
        let number = Decimal::try_from_i128_with_scale(n, u32::from(PLAIN_DIGITS))
            .map_err(|_| CurrencyError::Overflow(n.to_string()))?;
        Ok(Self::from_parts(number, "", Unit::None))
    }

    /// Creates a plain number amount from an `i64` count of minor units.
    pub fn from_i64(n: i64) -> CurrencyResult<Self> {
        Self::from_i128(n as i128)
    }

    /// Creates a percent amount. `percent("0.125")` formats as `12.5%`.
    pub fn percent(n: &str) -> CurrencyResult<Self> {
        Ok(Self::from_parts(numeric::parse(n)?, "", Unit::Percent))
    }

    /// The universal zero amount: unit-less, without a currency code.
    ///
    /// It is the absorbing identity for [`add`](Self::add) and
    /// [`sub`](Self::sub) across any currency.
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Internal constructor; `code` must be empty or a 3-letter code.
    pub(crate) fn from_parts(number: Decimal, code: &str, unit: Unit) -> Self {
        Self {
            number,
            code: Code::from(code).expect("currency codes are at most 3 bytes"),
            unit,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Returns the number as a canonical numeric string.
    ///
    /// Trailing zeros carried by the amount's scale are preserved.
    pub fn number(&self) -> String {
        self.number.to_string()
    }

    /// Returns the currency code, or `""` for unit-less amounts.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the amount's unit.
    #[inline]
    pub fn unit(&self) -> Unit {
        self.unit
    }

    #[inline]
    pub fn is_currency(&self) -> bool {
        self.unit == Unit::Currency
    }

    #[inline]
    pub fn is_number(&self) -> bool {
        self.unit == Unit::None
    }

    #[inline]
    pub fn is_percent(&self) -> bool {
        self.unit == Unit::Percent
    }

    #[inline]
    pub(crate) fn decimal(&self) -> Decimal {
        self.number
    }

    /// Fraction digits used when a `DEFAULT_DIGITS` sentinel is resolved:
    /// the currency's digit count, or 2 for plain and percent amounts.
    pub(crate) fn default_digits(&self) -> u8 {
        match self.unit {
            Unit::Currency => currency::digits_for(&self.code).unwrap_or(PLAIN_DIGITS),
            _ => PLAIN_DIGITS,
        }
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Adds `b` to this amount.
    ///
    /// The units and currency codes must match, except that the zero amount
    /// is an identity for any operand.
    ///
    /// # Errors
    /// `Mismatch` carrying both operands when units or codes differ.
    pub fn add(&self, b: &Amount) -> CurrencyResult<Self> {
        if self.unit != b.unit || self.code != b.code {
            if self.is_zero_amount() {
                return Ok(b.clone());
            }
            if b.is_zero_amount() {
                return Ok(self.clone());
            }
            return Err(self.mismatch(b));
        }
        let ctx = context_for(&[&self.number, &b.number]);
        let number = ctx.add(self.number, b.number)?;
        Ok(Self {
            number,
            code: self.code,
            unit: self.unit,
        })
    }

    /// Subtracts `b` from this amount.
    ///
    /// The zero amount is an identity here too: `zero - b == -b`.
    pub fn sub(&self, b: &Amount) -> CurrencyResult<Self> {
        if self.unit != b.unit || self.code != b.code {
            if self.is_zero_amount() {
                return Ok(Self {
                    number: -b.number,
                    code: b.code,
                    unit: b.unit,
                });
            }
            if b.is_zero_amount() {
                return Ok(self.clone());
            }
            return Err(self.mismatch(b));
        }
        let ctx = context_for(&[&self.number, &b.number]);
        let number = ctx.sub(self.number, b.number)?;
        Ok(Self {
            number,
            code: self.code,
            unit: self.unit,
        })
    }

    /// Multiplies this amount by the decimal string `n`.
    ///
    /// The product keeps the combined scale of both operands; trailing zeros
    /// are preserved on purpose (`20.99 * 0.20 == 4.1980`), unlike
    /// [`div`](Self::div), which reduces its result.
    pub fn mul(&self, n: &str) -> CurrencyResult<Self> {
        let factor = numeric::parse(n)?;
        let ctx = context_for(&[&self.number, &factor]);
        let number = ctx.mul(self.number, factor)?;
        Ok(Self {
            number,
            code: self.code,
            unit: self.unit,
        })
    }

    /// Divides this amount by the decimal string `n`.
    ///
    /// The quotient is reduced: trailing zeros are stripped.
    ///
    /// # Errors
    /// `InvalidNumber` if `n` does not parse or parses to zero.
    pub fn div(&self, n: &str) -> CurrencyResult<Self> {
        let divisor = numeric::parse(n)?;
        if divisor.is_zero() {
            return Err(CurrencyError::InvalidNumber(n.to_string()));
        }
        let ctx = context_for(&[&self.number, &divisor]);
        let number = ctx.div(self.number, divisor)?.normalize();
        Ok(Self {
            number,
            code: self.code,
            unit: self.unit,
        })
    }

    /// Shorthand for `round_to(DEFAULT_DIGITS, RoundingMode::HalfUp)`.
    pub fn round(&self) -> Self {
        self.round_to(DEFAULT_DIGITS, RoundingMode::HalfUp)
    }

    /// Rounds to the given number of fraction digits, padding with trailing
    /// zeros when the amount has fewer.
    ///
    /// `DEFAULT_DIGITS` substitutes the amount's currency digit count (or 2
    /// without a currency).
    pub fn round_to(&self, digits: u8, mode: RoundingMode) -> Self {
        let digits = if digits == DEFAULT_DIGITS {
            self.default_digits()
        } else {
            digits
        };
        let ctx = rounding_context(&self.number, mode);
        Self {
            number: ctx.quantize(self.number, digits),
            code: self.code,
            unit: self.unit,
        }
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Three-way comparison against `b`.
    ///
    /// # Errors
    /// `Mismatch` when units or currency codes differ.
    pub fn cmp(&self, b: &Amount) -> CurrencyResult<Ordering> {
        if self.unit != b.unit || self.code != b.code {
            return Err(self.mismatch(b));
        }
        Ok(self.number.cmp(&b.number))
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.number > Decimal::ZERO
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.number < Decimal::ZERO
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.number.is_zero()
    }

    // ========================================================================
    // Narrowing
    // ========================================================================

    /// Returns the amount in minor units.
    ///
    /// The amount is rounded to its currency digit count first, so
    /// `12.3564 USD` yields `1236`.
    pub fn to_minor_units(&self) -> i128 {
        self.round().number.mantissa()
    }

    /// Returns the amount in minor units as an `i64`.
    ///
    /// # Errors
    /// `Overflow` when the minor-unit value exceeds the `i64` range.
    pub fn to_i64(&self) -> CurrencyResult<i64> {
        i64::try_from(self.to_minor_units())
            .map_err(|_| CurrencyError::Overflow(self.number()))
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Whether this is the universal zero amount (unit-less, no code, 0).
    fn is_zero_amount(&self) -> bool {
        self.unit == Unit::None && self.code.is_empty() && self.number.is_zero()
    }

    fn mismatch(&self, b: &Amount) -> CurrencyError {
        CurrencyError::Mismatch {
            a: self.clone(),
            b: b.clone(),
        }
    }
}

/// Fraction digits for amounts without a currency.
const PLAIN_DIGITS: u8 = 2;

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Unit::None => write!(f, "{}", self.number),
            Unit::Currency => write!(f, "{} {}", self.number, self.code),
            Unit::Percent => write!(f, "{} %", self.number),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
