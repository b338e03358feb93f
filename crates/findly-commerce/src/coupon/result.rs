//! Outcome of pricing one listing.

use serde::{Deserialize, Serialize};

use crate::coupon::Coupon;
use crate::money::Money;

/// Price breakdown for one product after coupon selection.
///
/// `chosen_coupon` is `None` when no coupon was applied. A chosen coupon may
/// still have zero effect; use [`PricingResult::has_coupon`] and
/// [`PricingResult::savings`] to tell the two apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Price before any coupon.
    pub original_price: Money,
    /// The winning coupon, if any.
    pub chosen_coupon: Option<Coupon>,
    /// Price after the winning coupon. Never above `original_price`.
    pub final_price: Money,
}

impl PricingResult {
    /// A result with no coupon applied.
    pub fn no_coupon(price: Money) -> Self {
        Self {
            original_price: price,
            chosen_coupon: None,
            final_price: price,
        }
    }

    pub fn has_coupon(&self) -> bool {
        self.chosen_coupon.is_some()
    }

    /// Amount saved by the chosen coupon.
    pub fn savings(&self) -> Money {
        self.original_price
            .saturating_sub(&self.final_price)
            .unwrap_or_else(|_| Money::zero(self.original_price.currency))
    }

    /// Savings as a percentage of the original price.
    pub fn discount_percentage(&self) -> f64 {
        self.original_price.percent_of(&self.savings())
    }

    /// Display label of the chosen coupon, e.g. `-20%`.
    pub fn coupon_label(&self) -> Option<String> {
        self.chosen_coupon
            .as_ref()
            .map(|c| c.label(self.original_price.currency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_no_coupon() {
        let price = Money::new(4999, Currency::USD);
        let result = PricingResult::no_coupon(price);
        assert!(!result.has_coupon());
        assert_eq!(result.final_price, price);
        assert!(result.savings().is_zero());
        assert_eq!(result.coupon_label(), None);
    }

    #[test]
    fn test_savings_and_percentage() {
        let result = PricingResult {
            original_price: Money::new(10000, Currency::USD),
            chosen_coupon: Some(Coupon::percent("SMART10", 10.0)),
            final_price: Money::new(9000, Currency::USD),
        };

        assert_eq!(result.savings().amount_cents, 1000);
        assert!((result.discount_percentage() - 10.0).abs() < 0.01);
        assert_eq!(result.coupon_label().as_deref(), Some("-10%"));
    }

    #[test]
    fn test_zero_effect_coupon_is_distinguishable() {
        let price = Money::new(10000, Currency::USD);
        let result = PricingResult {
            original_price: price,
            chosen_coupon: Some(Coupon::fixed("NOTHING", 0.0)),
            final_price: price,
        };

        assert!(result.has_coupon());
        assert!(result.savings().is_zero());
        assert_ne!(result, PricingResult::no_coupon(price));
    }
}
