//! Product card view model.
//!
//! A card is everything a renderer needs for one result, computed up front so
//! that no markup ever carries serialized state.

use findly_commerce::coupon::{select_best_coupon, PricingResult};
use findly_commerce::{Currency, Money};
use serde::Serialize;

use crate::badges::{BadgePolicy, Badges};
use crate::product::{Intelligence, SearchProduct};
use crate::settings::UserSettings;

/// Title shown when the product has none.
pub const MISSING_TITLE: &str = "\u{2014}";

/// Display data for one search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub title: String,
    pub thumbnail: Option<String>,
    pub source: Option<String>,
    /// Coupon selection, including the parsed original price.
    pub pricing: PricingResult,
    /// Label of the chosen coupon, e.g. `-10%`.
    pub coupon_label: Option<String>,
    pub over_budget: bool,
    pub badges: Badges,
    /// Outbound link, only when it is an http(s) URL.
    pub link: Option<String>,
    /// Advisory data passed through for the analysis view.
    pub intelligence: Intelligence,
}

impl ProductCard {
    pub fn price(&self) -> Money {
        self.pricing.original_price
    }

    /// Whether to show an original/discounted price pair.
    ///
    /// Only when the chosen coupon actually lowers the price; a fully
    /// discounted item still shows the pair with a zero final price.
    pub fn shows_discount(&self) -> bool {
        self.pricing.has_coupon()
            && self.pricing.final_price.amount_cents < self.pricing.original_price.amount_cents
    }
}

/// Builds cards for one render pass.
#[derive(Debug, Clone)]
pub struct CardBuilder<'a> {
    settings: &'a UserSettings,
    policy: &'a BadgePolicy,
    currency: Currency,
}

impl<'a> CardBuilder<'a> {
    pub fn new(settings: &'a UserSettings, policy: &'a BadgePolicy) -> Self {
        Self {
            settings,
            policy,
            currency: Currency::default(),
        }
    }

    /// Set the display currency.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Build the card for one product.
    pub fn build(&self, product: &SearchProduct) -> ProductCard {
        let price = product.price(self.currency);
        let pricing = select_best_coupon(price, &product.coupons);

        ProductCard {
            title: product
                .title
                .clone()
                .unwrap_or_else(|| MISSING_TITLE.to_string()),
            thumbnail: product.thumbnail.clone(),
            source: product.source.clone(),
            coupon_label: pricing.coupon_label(),
            over_budget: self.settings.is_over_budget(&price),
            badges: self.policy.evaluate(&product.intelligence),
            link: product.best_link().and_then(safe_link),
            intelligence: product.intelligence.clone(),
            pricing,
        }
    }

    /// Build cards for a whole results list, preserving order.
    pub fn build_all(&self, products: &[SearchProduct]) -> Vec<ProductCard> {
        products.iter().map(|p| self.build(p)).collect()
    }
}

fn safe_link(link: &str) -> Option<String> {
    link.starts_with("http").then(|| link.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::badges::{PriceTier, StrategicVerdict};
    use serde_json::json;

    fn product(value: serde_json::Value) -> SearchProduct {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_card_with_coupon() {
        let settings = UserSettings::default();
        let policy = BadgePolicy::default();
        let card = CardBuilder::new(&settings, &policy).build(&product(json!({
            "title": "Headphones",
            "price": "$200.00",
            "link": "https://shop.example/hp",
            "coupons": [
                {"code": "SAVE25", "type": "fixed", "discount": 25},
                {"code": "SMART10", "type": "percent", "discount": 10}
            ],
            "intelligence": {
                "priceIntel": {"score": 55},
                "finalVerdict": {"decision": "BUY_NOW"}
            }
        })));

        assert_eq!(card.title, "Headphones");
        assert_eq!(card.price().amount_cents, 20000);
        assert_eq!(card.pricing.chosen_coupon.as_ref().unwrap().code, "SAVE25");
        assert_eq!(card.pricing.final_price.amount_cents, 17500);
        assert_eq!(card.coupon_label.as_deref(), Some("-$25"));
        assert!(card.shows_discount());
        assert!(!card.over_budget);
        assert_eq!(card.badges.price, PriceTier::Good);
        assert_eq!(card.badges.verdict, Some(StrategicVerdict::BuyNow));
        assert_eq!(card.link.as_deref(), Some("https://shop.example/hp"));
    }

    #[test]
    fn test_card_defaults() {
        let settings = UserSettings::default();
        let policy = BadgePolicy::default();
        let card = CardBuilder::new(&settings, &policy).build(&product(json!({
            "price": "n/a",
            "link": "javascript:alert(1)",
            "coupons": [{"code": "SAVE25", "type": "fixed", "discount": 25}]
        })));

        assert_eq!(card.title, MISSING_TITLE);
        assert!(card.price().is_zero());
        assert!(!card.pricing.has_coupon());
        assert!(!card.shows_discount());
        assert_eq!(card.coupon_label, None);
        assert_eq!(card.link, None);
    }

    #[test]
    fn test_full_discount_still_shows_pair() {
        let settings = UserSettings::default();
        let policy = BadgePolicy::default();
        let card = CardBuilder::new(&settings, &policy).build(&product(json!({
            "price": "50",
            "coupons": [{"code": "HUGE", "type": "fixed", "discount": 1000}]
        })));

        assert!(card.pricing.has_coupon());
        assert!(card.pricing.final_price.is_zero());
        assert!(card.shows_discount());
        assert_eq!(card.price().amount_cents, 5000);
    }

    #[test]
    fn test_zero_effect_coupon_shows_no_pair() {
        let settings = UserSettings::default();
        let policy = BadgePolicy::default();
        let card = CardBuilder::new(&settings, &policy).build(&product(json!({
            "price": "100",
            "coupons": [{"code": "NOTHING", "type": "percent", "discount": 0}]
        })));

        assert!(card.pricing.has_coupon());
        assert!(card.pricing.savings().is_zero());
        assert!(!card.shows_discount());
    }

    #[test]
    fn test_over_budget_uses_original_price() {
        let settings = UserSettings {
            budget: 150.0,
            ..Default::default()
        };
        let policy = BadgePolicy::default();
        let card = CardBuilder::new(&settings, &policy).build(&product(json!({
            "price": 160,
            "coupons": [{"code": "P20", "type": "percent", "discount": 20}]
        })));

        assert!(card.over_budget);
        assert_eq!(card.pricing.final_price.amount_cents, 12800);
    }

    #[test]
    fn test_build_all_keeps_order_and_currency() {
        let settings = UserSettings::default();
        let policy = BadgePolicy::default();
        let builder = CardBuilder::new(&settings, &policy).with_currency(Currency::EUR);
        let cards = builder.build_all(&[
            product(json!({"title": "first", "price": "10"})),
            product(json!({"title": "second", "price": "20"})),
        ]);

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].title, "first");
        assert_eq!(cards[1].price().currency, Currency::EUR);
    }
}
