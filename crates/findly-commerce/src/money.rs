//! Money type for listing prices.
//!
//! Amounts are kept in the smallest currency unit so that coupon arithmetic
//! and tie comparisons between candidate prices are exact.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CommerceError;

/// Currencies a listing can be displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    TRY,
    SAR,
    AED,
    JPY,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::TRY => "TRY",
            Currency::SAR => "SAR",
            Currency::AED => "AED",
            Currency::JPY => "JPY",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::TRY => "\u{20ba}",
            Currency::SAR => "SAR ",
            Currency::AED => "AED ",
            Currency::JPY => "\u{00a5}",
        }
    }

    /// Number of decimal places in the minor unit.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Result<Self, CommerceError> {
        match code.trim().to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "TRY" => Ok(Currency::TRY),
            "SAR" => Ok(Currency::SAR),
            "AED" => Ok(Currency::AED),
            "JPY" => Ok(Currency::JPY),
            _ => Err(CommerceError::UnknownCurrency(code.to_string())),
        }
    }

    fn minor_units(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary amount with its currency.
///
/// Listing prices are never negative; constructors and the coupon arithmetic
/// below clamp at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a Money value from minor units.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount, rounding to the minor unit.
    ///
    /// Non-finite and negative amounts become zero.
    ///
    /// ```
    /// use findly_commerce::money::{Currency, Money};
    /// let price = Money::from_decimal(49.99, Currency::USD);
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        if !amount.is_finite() || amount <= 0.0 {
            return Self::zero(currency);
        }
        // Float to int casts saturate, so huge amounts land on i64::MAX.
        let amount_cents = (amount * currency.minor_units() as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// Zero in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    pub fn is_positive(&self) -> bool {
        self.amount_cents > 0
    }

    /// Convert back to a decimal amount.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / self.currency.minor_units() as f64
    }

    /// Format with symbol (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        format!("{:.places$}", self.to_decimal())
    }

    /// Subtract, flooring the result at zero.
    pub fn saturating_sub(&self, other: &Money) -> Result<Money, CommerceError> {
        if self.currency != other.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: other.currency.code().to_string(),
            });
        }
        let cents = self.amount_cents.saturating_sub(other.amount_cents).max(0);
        Ok(Money::new(cents, self.currency))
    }

    /// Multiply by a decimal factor, rounding to the minor unit and flooring at zero.
    pub fn scale(&self, factor: f64) -> Money {
        let scaled = (self.amount_cents as f64 * factor).round();
        if !scaled.is_finite() || scaled <= 0.0 {
            return Money::zero(self.currency);
        }
        Money::new(scaled as i64, self.currency)
    }

    /// What share of `self` the amount `part` represents, in percent.
    pub fn percent_of(&self, part: &Money) -> f64 {
        if self.amount_cents == 0 {
            return 0.0;
        }
        (part.amount_cents as f64 / self.amount_cents as f64) * 100.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
