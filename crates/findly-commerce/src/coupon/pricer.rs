//! Best-coupon selection.
//!
//! Both entry points are pure: no state is kept between calls, so pricing a
//! results page can call them once per product in any order.

use crate::coupon::{Coupon, PricingResult, RawCoupon};
use crate::money::Money;

/// Pick the coupon that gives the lowest price and compute that price.
///
/// - A non-positive price or an empty list gives [`PricingResult::no_coupon`].
/// - Entries that fail [`RawCoupon::validate`] are skipped.
/// - On equal resulting prices the earlier coupon wins, preserving the
///   server's ordering.
pub fn select_best_coupon(price: Money, coupons: &[RawCoupon]) -> PricingResult {
    if !price.is_positive() || coupons.is_empty() {
        return PricingResult::no_coupon(price);
    }

    let valid = coupons.iter().filter_map(|raw| match raw.validate() {
        Ok(coupon) => Some(coupon),
        Err(e) => {
            tracing::debug!(reason = %e, "skipping coupon");
            None
        }
    });

    best_of(price, valid)
}

/// Same selection over coupons that are already validated.
pub fn best_of(price: Money, coupons: impl IntoIterator<Item = Coupon>) -> PricingResult {
    if !price.is_positive() {
        return PricingResult::no_coupon(price);
    }

    let mut best: Option<(Coupon, Money)> = None;

    for coupon in coupons {
        let candidate = coupon.apply(&price);
        let better = match &best {
            None => true,
            Some((_, best_price)) => candidate.amount_cents < best_price.amount_cents,
        };
        if better {
            best = Some((coupon, candidate));
        }
    }

    match best {
        Some((coupon, final_price)) => PricingResult {
            original_price: price,
            chosen_coupon: Some(coupon),
            final_price,
        },
        None => PricingResult::no_coupon(price),
    }
}

/// Price after a single, already chosen coupon.
pub fn apply_coupon(price: Money, coupon: &Coupon) -> Money {
    coupon.apply(&price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;
    use serde_json::json;

    fn usd(amount: f64) -> Money {
        Money::from_decimal(amount, Currency::USD)
    }

    fn raw(value: serde_json::Value) -> RawCoupon {
        RawCoupon(value)
    }

    #[test]
    fn test_empty_list_is_no_coupon() {
        let result = select_best_coupon(usd(100.0), &[]);
        assert!(!result.has_coupon());
        assert_eq!(result.final_price, usd(100.0));
    }

    #[test]
    fn test_zero_price_is_no_coupon() {
        let coupons = [raw(json!({"code": "A", "type": "fixed", "discount": 5}))];
        let result = select_best_coupon(usd(0.0), &coupons);
        assert!(!result.has_coupon());
        assert!(result.final_price.is_zero());
    }

    #[test]
    fn test_percent_beats_fixed() {
        let coupons = [
            raw(json!({"code": "P20", "type": "percent", "discount": 20})),
            raw(json!({"code": "F15", "type": "fixed", "discount": 15})),
        ];
        let result = select_best_coupon(usd(100.0), &coupons);
        assert_eq!(result.chosen_coupon.unwrap().code, "P20");
        assert_eq!(result.final_price, usd(80.0));
    }

    #[test]
    fn test_tie_keeps_first() {
        let coupons = [
            raw(json!({"code": "FIRST", "type": "percent", "discount": 10})),
            raw(json!({"code": "SECOND", "type": "fixed", "discount": 10})),
        ];
        let result = select_best_coupon(usd(100.0), &coupons);
        assert_eq!(result.chosen_coupon.unwrap().code, "FIRST");
        assert_eq!(result.final_price, usd(90.0));
    }

    #[test]
    fn test_fixed_clamps_to_zero() {
        let coupons = [raw(json!({"code": "BIG", "type": "fixed", "discount": 1000}))];
        let result = select_best_coupon(usd(50.0), &coupons);
        assert!(result.has_coupon());
        assert!(result.final_price.is_zero());
        assert_eq!(result.savings(), usd(50.0));
    }

    #[test]
    fn test_malformed_entry_does_not_block_others() {
        let coupons = [
            raw(json!({"code": "BAD", "type": "fixed", "discount": "abc"})),
            raw(json!({"code": "GOOD", "type": "fixed", "discount": 5})),
        ];
        let result = select_best_coupon(usd(100.0), &coupons);
        assert_eq!(result.chosen_coupon.unwrap().code, "GOOD");
        assert_eq!(result.final_price, usd(95.0));
    }

    #[test]
    fn test_all_malformed_is_no_coupon() {
        let coupons = [raw(json!(null)), raw(json!({"code": "X"}))];
        let result = select_best_coupon(usd(100.0), &coupons);
        assert_eq!(result, PricingResult::no_coupon(usd(100.0)));
    }

    #[test]
    fn test_later_strictly_better_coupon_wins() {
        let coupons = [
            raw(json!({"code": "SMALL", "type": "fixed", "discount": 1})),
            raw(json!({"code": "MID", "type": "percent", "discount": 5})),
            raw(json!({"code": "LARGE", "type": "fixed", "discount": 30})),
        ];
        let result = select_best_coupon(usd(100.0), &coupons);
        assert_eq!(result.chosen_coupon.unwrap().code, "LARGE");
    }

    #[test]
    fn test_apply_coupon_is_idempotent() {
        let coupon = Coupon::percent("P15", 15.0);
        let first = apply_coupon(usd(59.99), &coupon);
        let second = apply_coupon(usd(59.99), &coupon);
        assert_eq!(first, second);
        assert_eq!(first, usd(50.99));
    }

    #[test]
    fn test_apply_coupon_ignores_negative_and_nan_discounts() {
        assert_eq!(apply_coupon(usd(100.0), &Coupon::percent("NEG", -10.0)), usd(100.0));
        assert_eq!(apply_coupon(usd(100.0), &Coupon::percent("NAN", f64::NAN)), usd(100.0));
        assert_eq!(apply_coupon(usd(100.0), &Coupon::fixed("NEG", -20.0)), usd(100.0));
    }

    #[test]
    fn test_best_of_never_raises_or_zeroes_on_bad_discounts() {
        let result = best_of(
            usd(100.0),
            vec![Coupon::percent("NEG", -10.0), Coupon::percent("NAN", f64::NAN)],
        );
        assert_eq!(result.final_price, usd(100.0));

        let result = best_of(
            usd(100.0),
            vec![
                Coupon::percent("NAN", f64::NAN),
                Coupon::percent("NEG", -10.0),
                Coupon::fixed("F5", 5.0),
            ],
        );
        assert_eq!(result.chosen_coupon.unwrap().code, "F5");
        assert_eq!(result.final_price, usd(95.0));
    }

    #[test]
    fn test_best_of_validated() {
        let result = best_of(
            usd(40.0),
            vec![Coupon::fixed("F5", 5.0), Coupon::percent("P25", 25.0)],
        );
        assert_eq!(result.chosen_coupon.unwrap().code, "P25");
        assert_eq!(result.final_price, usd(30.0));
    }
}
