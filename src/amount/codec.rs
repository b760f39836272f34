// ============================================================================
// Amount Wire Codecs
// Binary, JSON and SQL-composite-text encodings of Amount
// ============================================================================
//
// All three formats are part of the stable contract:
// - binary:    [unit byte 0|1|2][3 ASCII code bytes][decimal string bytes]
// - JSON:      {"unit":0|1|2,"number":"3.45","code":"USD"}
// - composite: "(3.45,1,USD)" (PostgreSQL composite-type text)
//
// Decoding is all-or-nothing: every decoder is a constructor; a failed
// decode never leaves a partially-assigned amount behind.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::amount::{Amount, Unit};
use crate::currency;
use crate::error::{CurrencyError, CurrencyResult};
use crate::numeric;

/// Fixed-width representation of "no currency" in binary and composite
/// formats (a blank `char(3)` column).
const BLANK_CODE: &str = "   ";

impl Amount {
    // ========================================================================
    // Binary
    // ========================================================================

    /// Encodes the amount into the binary wire format.
    pub fn to_binary(&self) -> Vec<u8> {
        let number = self.number();
        let mut buf = Vec::with_capacity(4 + number.len());
        buf.push(self.unit().wire_value());
        let code = if self.code().is_empty() {
            BLANK_CODE
        } else {
            self.code()
        };
        buf.extend_from_slice(code.as_bytes());
        buf.extend_from_slice(number.as_bytes());
        buf
    }

    /// Decodes an amount from the binary wire format.
    ///
    /// # Errors
    /// `InvalidCurrencyCode` when the input is shorter than a unit byte plus
    /// three code bytes, or the code is malformed; `InvalidNumber` when the
    /// unit tag or the numeric payload is malformed.
    pub fn from_binary(data: &[u8]) -> CurrencyResult<Self> {
        if data.len() < 4 {
            return Err(CurrencyError::InvalidCurrencyCode(
                String::from_utf8_lossy(data).into_owned(),
            ));
        }
        let unit = Unit::from_wire(data[0])
            .ok_or_else(|| CurrencyError::InvalidNumber(format!("unit tag {:#04x}", data[0])))?;
        let code = std::str::from_utf8(&data[1..4]).map_err(|_| {
            CurrencyError::InvalidCurrencyCode(String::from_utf8_lossy(&data[1..4]).into_owned())
        })?;
        let code = if code == BLANK_CODE { "" } else { code };
        let n = std::str::from_utf8(&data[4..]).map_err(|_| {
            CurrencyError::InvalidNumber(String::from_utf8_lossy(&data[4..]).into_owned())
        })?;
        let number = numeric::parse(n)?;
        check_code(unit, code)?;

        let amount = Self::from_parts(number, code, unit);
        tracing::trace!(amount = %amount, "decoded binary amount");
        Ok(amount)
    }

    // ========================================================================
    // SQL composite text
    // ========================================================================

    /// Encodes the amount as PostgreSQL composite-type text,
    /// `"(number,unit,code)"`. The zero amount serializes as `"(0,0,)"`.
    pub fn to_composite(&self) -> String {
        format!(
            "({},{},{})",
            self.number(),
            self.unit().wire_value(),
            self.code()
        )
    }

    /// Decodes an amount from PostgreSQL composite-type text.
    ///
    /// An empty source yields the zero amount. A blank code (empty, or three
    /// spaces as stored in a `char(3)` column) together with a zero number
    /// also yields the zero amount, whatever the stored unit says.
    pub fn from_composite(src: &str) -> CurrencyResult<Self> {
        if src.is_empty() {
            return Ok(Self::zero());
        }
        let inner = src.trim_start_matches('(').trim_end_matches(')');
        let mut values = inner.split(',');
        let (n, unit, code) = match (values.next(), values.next(), values.next(), values.next()) {
            (Some(n), Some(unit), Some(code), None) => (n, unit, code),
            _ => return Err(CurrencyError::InvalidNumber(src.to_string())),
        };

        let number = numeric::parse(n)?;
        let code = if code == BLANK_CODE { "" } else { code };
        // Allow the zero value regardless of the stored unit.
        if code.is_empty() && number.is_zero() {
            return Ok(Self::zero());
        }

        let unit = match unit {
            "0" => Unit::None,
            "1" => Unit::Currency,
            "2" => Unit::Percent,
            _ => return Err(CurrencyError::InvalidNumber(src.to_string())),
        };
        check_code(unit, code)?;

        let amount = Self::from_parts(number, code, unit);
        tracing::trace!(amount = %amount, "decoded composite amount");
        Ok(amount)
    }
}

/// Validates a decoded code against a decoded unit.
///
/// Currency amounts need a known, non-empty code; other units carry either
/// no code or whatever short tag was stored with them.
fn check_code(unit: Unit, code: &str) -> CurrencyResult<()> {
    if code.len() > 3 {
        return Err(CurrencyError::InvalidCurrencyCode(code.to_string()));
    }
    if unit == Unit::Currency && (code.is_empty() || !currency::is_valid(code)) {
        return Err(CurrencyError::InvalidCurrencyCode(code.to_string()));
    }
    Ok(())
}

// ============================================================================
// JSON (serde)
// ============================================================================

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Amount", 3)?;
        state.serialize_field("unit", &self.unit().wire_value())?;
        state.serialize_field("number", &self.number())?;
        state.serialize_field("code", self.code())?;
        state.end()
    }
}

/// Raw JSON shape. `number` is accepted both as a string and as a bare
/// number literal.
#[derive(serde::Deserialize)]
struct WireAmount {
    #[serde(default)]
    unit: u8,
    #[serde(default)]
    number: serde_json::Value,
    #[serde(default)]
    code: String,
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = WireAmount::deserialize(deserializer)?;
        Amount::from_json_wire(wire).map_err(serde::de::Error::custom)
    }
}

impl Amount {
    fn from_json_wire(wire: WireAmount) -> CurrencyResult<Self> {
        let n = match wire.number {
            serde_json::Value::String(s) => s,
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        };
        let number = numeric::parse(&n)?;
        let unit = Unit::from_wire(wire.unit)
            .ok_or_else(|| CurrencyError::InvalidNumber(format!("unit tag {}", wire.unit)))?;
        check_code(unit, &wire.code)?;
        Ok(Self::from_parts(number, &wire.code, unit))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_binary() {
        let a = Amount::currency("3.45", "USD").unwrap();
        assert_eq!(a.to_binary(), b"\x01USD3.45".to_vec());

        // Unit-less amounts carry a blank fixed-width code.
        assert_eq!(Amount::zero().to_binary(), b"\x00   0".to_vec());
    }

    #[test]
    fn test_from_binary_errors() {
        let err = Amount::from_binary(b"US").unwrap_err();
        assert_eq!(err, CurrencyError::InvalidCurrencyCode("US".into()));
        assert_eq!(err.to_string(), "invalid currency code \"US\"");

        let err = Amount::from_binary(b"\x01USD3,60").unwrap_err();
        assert_eq!(err, CurrencyError::InvalidNumber("3,60".into()));

        let err = Amount::from_binary(b"\x01XXX2.60").unwrap_err();
        assert_eq!(err, CurrencyError::InvalidCurrencyCode("XXX".into()));

        // Unknown unit tag.
        let err = Amount::from_binary(b"\x07USD3.45").unwrap_err();
        assert_eq!(err, CurrencyError::InvalidNumber("unit tag 0x07".into()));
    }

    #[test]
    fn test_from_binary() {
        let a = Amount::from_binary(b"\x01USD3.45").unwrap();
        assert_eq!(a.number(), "3.45");
        assert_eq!(a.code(), "USD");
        assert_eq!(a.unit(), Unit::Currency);
    }

    #[test]
    fn test_binary_round_trip() {
        let amounts = [
            Amount::currency("3.45", "USD").unwrap(),
            Amount::currency("-1234.59", "EUR").unwrap(),
            Amount::currency("50", "JPY").unwrap(),
            Amount::new("0.000001").unwrap(),
            Amount::percent("12.5").unwrap(),
            Amount::zero(),
        ];
        for a in amounts {
            assert_eq!(Amount::from_binary(&a.to_binary()).unwrap(), a);
        }
    }

    #[test]
    fn test_json_serialize() {
        let a = Amount::currency("3.45", "USD").unwrap();
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            r#"{"unit":1,"number":"3.45","code":"USD"}"#
        );
    }

    #[test]
    fn test_json_deserialize() {
        let err = serde_json::from_str::<Amount>(r#"{"unit":1,"number":"INVALID","code":"USD"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("invalid number \"INVALID\""));

        // A number that is neither a string nor a number literal.
        let err = serde_json::from_str::<Amount>(
            r#"{"unit":1,"number":{"key":"value"},"code":"USD"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("invalid number"));

        // A bare number literal is accepted.
        let a: Amount =
            serde_json::from_str(r#"{"unit":1,"number":3.45,"code":"USD"}"#).unwrap();
        assert_eq!(a.number(), "3.45");
        assert_eq!(a.code(), "USD");

        let err = serde_json::from_str::<Amount>(r#"{"unit":1,"number":"3.45","code":"usd"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("invalid currency code \"usd\""));

        let a: Amount =
            serde_json::from_str(r#"{"unit":1,"number":"3.45","code":"USD"}"#).unwrap();
        assert_eq!(a.number(), "3.45");
        assert_eq!(a.code(), "USD");
        assert_eq!(a.unit(), Unit::Currency);
    }

    #[test]
    fn test_json_round_trip() {
        let amounts = [
            Amount::currency("3.45", "USD").unwrap(),
            Amount::percent("12.5").unwrap(),
            Amount::new("-0.001").unwrap(),
            Amount::zero(),
        ];
        for a in amounts {
            let encoded = serde_json::to_string(&a).unwrap();
            assert_eq!(serde_json::from_str::<Amount>(&encoded).unwrap(), a);
        }
    }

    #[test]
    fn test_to_composite() {
        let a = Amount::currency("3.45", "USD").unwrap();
        assert_eq!(a.to_composite(), "(3.45,1,USD)");

        assert_eq!(Amount::zero().to_composite(), "(0,0,)");
    }

    #[test]
    fn test_from_composite() {
        let tests: [(&str, Result<(&str, &str), CurrencyError>); 7] = [
            ("", Ok(("0", ""))),
            ("(3.45,1,USD)", Ok(("3.45", "USD"))),
            (
                "(3.45,1,)",
                Err(CurrencyError::InvalidCurrencyCode("".into())),
            ),
            ("(,1,USD)", Err(CurrencyError::InvalidNumber("".into()))),
            ("(0,1,)", Ok(("0", ""))),
            ("(0,1,   )", Ok(("0", ""))),
            (
                "(3.45)",
                Err(CurrencyError::InvalidNumber("(3.45)".into())),
            ),
        ];
        for (src, want) in tests {
            match (Amount::from_composite(src), want) {
                (Ok(a), Ok((number, code))) => {
                    assert_eq!(a.number(), number, "{:?}", src);
                    assert_eq!(a.code(), code, "{:?}", src);
                },
                (Err(err), Err(want)) => assert_eq!(err, want, "{:?}", src),
                (got, want) => panic!("{:?}: got {:?}, want {:?}", src, got, want),
            }
        }

        let a = Amount::from_composite("(3.45,1,USD)").unwrap();
        assert_eq!(a, Amount::currency("3.45", "USD").unwrap());
    }

    #[test]
    fn test_composite_round_trip() {
        let amounts = [
            Amount::currency("3.45", "USD").unwrap(),
            Amount::percent("12.5").unwrap(),
            Amount::new("-1234.59").unwrap(),
            Amount::zero(),
        ];
        for a in amounts {
            assert_eq!(Amount::from_composite(&a.to_composite()).unwrap(), a);
        }
    }
}
