//! Parsing of the free-form price field returned by the search API.
//!
//! Upstream prices arrive as strings like `"$1,299.99"`, `"SAR 45"` or plain
//! JSON numbers. Anything that cannot be read becomes zero, which the pricer
//! treats as "not eligible for discounts".

use serde::{Deserialize, Serialize};

use crate::money::{Currency, Money};

/// A price field as delivered by the search API, before normalization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawPrice(pub serde_json::Value);

impl RawPrice {
    /// Normalize to a non-negative decimal amount.
    pub fn amount(&self) -> f64 {
        match &self.0 {
            // The sign would be stripped from the string form as well.
            serde_json::Value::Number(n) => n.as_f64().map(f64::abs).unwrap_or(0.0),
            serde_json::Value::String(s) => parse_amount(s),
            _ => 0.0,
        }
    }

    /// Normalize to [`Money`] in the given currency.
    pub fn to_money(&self, currency: Currency) -> Money {
        Money::from_decimal(self.amount(), currency)
    }
}

impl From<&str> for RawPrice {
    fn from(s: &str) -> Self {
        Self(serde_json::Value::String(s.to_string()))
    }
}

impl From<f64> for RawPrice {
    fn from(n: f64) -> Self {
        Self(serde_json::json!(n))
    }
}

/// Parse a decimal amount out of a display string.
///
/// Every character other than an ASCII digit or `.` is dropped, then the
/// longest numeric prefix is read (`"12.5.3"` reads as `12.5`). Returns 0.0
/// when nothing numeric remains.
pub fn parse_amount(raw: &str) -> f64 {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut seen_dot = false;
    let prefix: String = kept
        .chars()
        .take_while(|c| {
            if *c == '.' {
                if seen_dot {
                    return false;
                }
                seen_dot = true;
            }
            true
        })
        .collect();

    prefix
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Parse a display string straight to [`Money`].
pub fn parse_price(raw: &str, currency: Currency) -> Money {
    Money::from_decimal(parse_amount(raw), currency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_strips_symbols() {
        assert_eq!(parse_amount("$1,299.99"), 1299.99);
        assert_eq!(parse_amount("SAR 45"), 45.0);
        assert_eq!(parse_amount("  80 USD"), 80.0);
    }

    #[test]
    fn test_parse_amount_longest_prefix() {
        assert_eq!(parse_amount("12.5.3"), 12.5);
        assert_eq!(parse_amount(".5"), 0.5);
        assert_eq!(parse_amount("5."), 5.0);
    }

    #[test]
    fn test_parse_amount_garbage_is_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("."), 0.0);
        assert_eq!(parse_amount("N/A"), 0.0);
        assert_eq!(parse_amount("call for price"), 0.0);
    }

    #[test]
    fn test_parse_amount_drops_sign() {
        assert_eq!(parse_amount("-20"), 20.0);
    }

    #[test]
    fn test_raw_price_number_and_string() {
        assert_eq!(RawPrice::from(49.99).amount(), 49.99);
        assert_eq!(RawPrice::from("$49.99").amount(), 49.99);
        assert_eq!(RawPrice(serde_json::json!(-5)).amount(), 5.0);
    }

    #[test]
    fn test_raw_price_other_types_are_zero() {
        assert_eq!(RawPrice(serde_json::Value::Null).amount(), 0.0);
        assert_eq!(RawPrice(serde_json::json!(true)).amount(), 0.0);
        assert_eq!(RawPrice(serde_json::json!({"value": 10})).amount(), 0.0);
    }

    #[test]
    fn test_parse_price_to_money() {
        let m = parse_price("$19.90", Currency::USD);
        assert_eq!(m.amount_cents, 1990);
        assert!(parse_price("free", Currency::USD).is_zero());
    }
}
