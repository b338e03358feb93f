//! Coupon types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CommerceError, CouponError};
use crate::money::{Currency, Money};

/// How a coupon's discount is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CouponKind {
    /// Percentage off (0 - 100).
    Percent,
    /// Fixed amount off, in currency units.
    Fixed,
}

impl CouponKind {
    /// Parse the API's `type` string. Matching is exact.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "percent" => Some(CouponKind::Percent),
            "fixed" => Some(CouponKind::Fixed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CouponKind::Percent => "percent",
            CouponKind::Fixed => "fixed",
        }
    }
}

/// A validated coupon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    /// Coupon code (e.g., "SMART10").
    pub code: String,
    /// Percent or fixed.
    #[serde(rename = "type")]
    pub kind: CouponKind,
    /// Magnitude: a percentage for `Percent`, a currency amount for `Fixed`.
    pub discount: f64,
}

impl Coupon {
    /// Create a percentage coupon.
    pub fn percent(code: impl Into<String>, percent: f64) -> Self {
        Self {
            code: code.into(),
            kind: CouponKind::Percent,
            discount: percent,
        }
    }

    /// Create a fixed amount coupon.
    pub fn fixed(code: impl Into<String>, amount: f64) -> Self {
        Self {
            code: code.into(),
            kind: CouponKind::Fixed,
            discount: amount,
        }
    }

    /// Price after this coupon, floored at zero.
    ///
    /// Non-positive prices pass through, and so does any price when the
    /// discount is negative or not finite.
    pub fn apply(&self, price: &Money) -> Money {
        if !price.is_positive() || !self.has_usable_discount() {
            return *price;
        }

        match self.kind {
            CouponKind::Percent => price.scale(1.0 - self.discount / 100.0),
            CouponKind::Fixed => {
                let off = Money::from_decimal(self.discount, price.currency);
                // Same currency by construction.
                price.saturating_sub(&off).unwrap_or(*price)
            }
        }
    }

    fn has_usable_discount(&self) -> bool {
        self.discount.is_finite() && self.discount >= 0.0
    }

    /// Short label for the discount, e.g. `-20%` or `-$15`.
    pub fn label(&self, currency: Currency) -> String {
        match self.kind {
            CouponKind::Percent => format!("-{}%", self.discount),
            CouponKind::Fixed => format!("-{}{}", currency.symbol(), self.discount),
        }
    }
}

/// A coupon entry exactly as the search API sent it.
///
/// Entries are kept verbatim so that one bad record never prevents the
/// others in the same list from being priced.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawCoupon(pub Value);

impl RawCoupon {
    /// Parse a JSON array of coupon records.
    ///
    /// Only the outer array has to be well formed; entries are validated later.
    pub fn parse_list(json: &str) -> Result<Vec<RawCoupon>, CommerceError> {
        let list: Vec<RawCoupon> = serde_json::from_str(json)?;
        Ok(list)
    }

    /// Validate the entry into a [`Coupon`].
    pub fn validate(&self) -> Result<Coupon, CouponError> {
        let obj = self.0.as_object().ok_or(CouponError::NotAnObject)?;

        let code = match obj.get("code") {
            Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
            _ => return Err(CouponError::MissingCode),
        };

        let kind = match obj.get("type") {
            None | Some(Value::Null) => return Err(CouponError::MissingType { code }),
            Some(Value::String(s)) => match CouponKind::parse(s) {
                Some(kind) => kind,
                None => {
                    return Err(CouponError::UnknownType {
                        code,
                        kind: s.clone(),
                    })
                }
            },
            Some(other) => {
                return Err(CouponError::UnknownType {
                    code,
                    kind: other.to_string(),
                })
            }
        };

        let discount = match obj.get("discount") {
            None | Some(Value::Null) => return Err(CouponError::MissingDiscount { code }),
            Some(Value::Number(n)) => n.as_f64(),
            // Numeric strings are coerced, like the rest of the API's numbers.
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            Some(_) => None,
        };

        let discount = match discount {
            Some(d) if d.is_finite() && d >= 0.0 => d,
            _ => {
                return Err(CouponError::InvalidDiscount {
                    code,
                    value: obj.get("discount").map(Value::to_string).unwrap_or_default(),
                })
            }
        };

        Ok(Coupon {
            code,
            kind,
            discount,
        })
    }
}

impl From<Coupon> for RawCoupon {
    fn from(coupon: Coupon) -> Self {
        Self(serde_json::json!({
            "code": coupon.code,
            "type": coupon.kind.as_str(),
            "discount": coupon.discount,
        }))
    }
}
