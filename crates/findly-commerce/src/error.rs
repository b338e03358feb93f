//! Commerce error types.

use thiserror::Error;

/// Errors raised by money handling and configuration validation.
///
/// The coupon pricer itself never fails; rejected coupons are described by
/// [`CouponError`] and skipped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Unsupported currency code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Why a coupon entry from the search API was left out of pricing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CouponError {
    /// The entry is not a JSON object.
    #[error("coupon entry is not an object")]
    NotAnObject,

    /// No usable code.
    #[error("coupon has no code")]
    MissingCode,

    /// No `type` field.
    #[error("coupon {code} has no type")]
    MissingType { code: String },

    /// A `type` other than percent or fixed.
    #[error("coupon {code} has unsupported type {kind}")]
    UnknownType { code: String, kind: String },

    /// No `discount` field.
    #[error("coupon {code} has no discount")]
    MissingDiscount { code: String },

    /// `discount` is not a finite, non-negative number.
    #[error("coupon {code} has invalid discount {value}")]
    InvalidDiscount { code: String, value: String },
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::ValidationError(e.to_string())
    }
}
