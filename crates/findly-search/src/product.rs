//! Product data models as returned by the search API.

use findly_commerce::coupon::RawCoupon;
use findly_commerce::price::RawPrice;
use findly_commerce::{Currency, Money};
use serde::{Deserialize, Serialize};

use crate::lenient;

/// A product in search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchProduct {
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: Option<String>,
    /// Free-form price as sent upstream.
    #[serde(default)]
    pub price: RawPrice,
    #[serde(default, deserialize_with = "lenient::text")]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub thumbnail: Option<String>,
    /// Store name.
    #[serde(default, deserialize_with = "lenient::text")]
    pub source: Option<String>,
    /// Coupon records, verbatim.
    #[serde(default, deserialize_with = "lenient::list")]
    pub coupons: Vec<RawCoupon>,
    /// Server-computed advisory block.
    #[serde(default, deserialize_with = "intelligence_or_default")]
    pub intelligence: Intelligence,
}

impl SearchProduct {
    /// Parsed price; unreadable prices are zero.
    pub fn price(&self, currency: Currency) -> Money {
        self.price.to_money(currency)
    }

    /// Link to send the user to: the verdict's best link, else the listing link.
    pub fn best_link(&self) -> Option<&str> {
        self.intelligence
            .final_verdict
            .best_link
            .as_deref()
            .or(self.link.as_deref())
    }
}

fn intelligence_or_default<'de, D>(deserializer: D) -> Result<Intelligence, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default())
}

/// Advisory fields computed by the server. Displayed, never recomputed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Intelligence {
    pub final_verdict: Verdict,
    pub price_intel: PriceIntel,
    pub value_intel: ValueIntel,
    pub forecast_intel: ForecastIntel,
    pub trust_intel: TrustIntel,
}

/// Final buy/wait recommendation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Verdict {
    /// e.g. `BUY_NOW`, `WAIT`, `WAIT_PRICE_DROP`, `OVERPRICED`.
    #[serde(deserialize_with = "lenient::text")]
    pub decision: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub emoji: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub reason: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub saving_percent: Option<f64>,
    #[serde(deserialize_with = "lenient::text")]
    pub best_store: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub best_price: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub confidence: Option<f64>,
    #[serde(deserialize_with = "lenient::text")]
    pub best_link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PriceIntel {
    /// 0 - 100, higher is a better price.
    #[serde(deserialize_with = "lenient::number")]
    pub score: Option<f64>,
    /// Market average price.
    #[serde(deserialize_with = "lenient::number")]
    pub average: Option<f64>,
    #[serde(deserialize_with = "lenient::text")]
    pub decision: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValueIntel {
    /// Deal score, 0 - 100.
    #[serde(deserialize_with = "lenient::number")]
    pub score: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub competitors: Option<f64>,
    /// Positive when the user's history favours this product.
    #[serde(deserialize_with = "lenient::number")]
    pub learning_boost: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ForecastIntel {
    /// `up`, `down` or anything else for stable.
    #[serde(deserialize_with = "lenient::text")]
    pub trend: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrustIntel {
    /// 0 - 100, higher is riskier.
    #[serde(deserialize_with = "lenient::number")]
    pub risk_score: Option<f64>,
}
