//! Badge selection from the intelligence block.
//!
//! Cut-off values are presentation policy, so they live in [`BadgePolicy`]
//! and can be overridden from configuration.

use serde::{Deserialize, Serialize};

use crate::product::Intelligence;

/// Thresholds used to pick badges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgePolicy {
    /// Minimum price score for an "excellent" price.
    pub excellent_price_score: f64,
    /// Minimum price score for a "good" price.
    pub good_price_score: f64,
    /// Risk scores above this mark a seller as risky.
    pub risk_score_threshold: f64,
}

impl Default for BadgePolicy {
    fn default() -> Self {
        Self {
            excellent_price_score: 70.0,
            good_price_score: 50.0,
            risk_score_threshold: 50.0,
        }
    }
}

impl BadgePolicy {
    /// Check the thresholds are usable. Returns a list of problems.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        let fields = [
            ("excellent_price_score", self.excellent_price_score),
            ("good_price_score", self.good_price_score),
            ("risk_score_threshold", self.risk_score_threshold),
        ];
        for (name, value) in fields {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                problems.push(format!("{} must be between 0 and 100", name));
            }
        }
        if self.good_price_score > self.excellent_price_score {
            problems.push("good_price_score must not exceed excellent_price_score".to_string());
        }
        problems
    }

    pub fn price_tier(&self, intel: &Intelligence) -> PriceTier {
        match intel.price_intel.score {
            Some(score) if score >= self.excellent_price_score => PriceTier::Excellent,
            Some(score) if score >= self.good_price_score => PriceTier::Good,
            _ => PriceTier::Weak,
        }
    }

    pub fn timing(&self, intel: &Intelligence) -> TimingBadge {
        match intel.forecast_intel.trend.as_deref() {
            Some("down") => TimingBadge::Wait,
            Some("up") => TimingBadge::MayRise,
            _ => TimingBadge::Stable,
        }
    }

    pub fn trust(&self, intel: &Intelligence) -> TrustBadge {
        if intel.trust_intel.risk_score.unwrap_or(0.0) > self.risk_score_threshold {
            TrustBadge::Risk
        } else {
            TrustBadge::Safe
        }
    }

    pub fn behavior(&self, intel: &Intelligence) -> BehaviorBadge {
        if intel.value_intel.learning_boost.unwrap_or(0.0) > 0.0 {
            BehaviorBadge::Suitable
        } else {
            BehaviorBadge::General
        }
    }

    /// All badges for one product.
    pub fn evaluate(&self, intel: &Intelligence) -> Badges {
        Badges {
            price: self.price_tier(intel),
            timing: self.timing(intel),
            trust: self.trust(intel),
            behavior: self.behavior(intel),
            verdict: intel
                .final_verdict
                .decision
                .as_deref()
                .and_then(StrategicVerdict::from_decision),
        }
    }
}

/// Quality of the price relative to the market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceTier {
    Excellent,
    Good,
    Weak,
}

/// Whether now is a good time to buy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimingBadge {
    /// Price is trending down.
    Wait,
    /// Price is trending up.
    MayRise,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustBadge {
    Risk,
    Safe,
}

/// Whether the recommendation is personalised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BehaviorBadge {
    Suitable,
    General,
}

/// The server's overall recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategicVerdict {
    BuyNow,
    Wait,
    WaitPriceDrop,
    Overpriced,
}

impl StrategicVerdict {
    /// Map the API's decision code. Unknown codes have no badge.
    pub fn from_decision(decision: &str) -> Option<Self> {
        match decision {
            "BUY_NOW" => Some(StrategicVerdict::BuyNow),
            "WAIT" => Some(StrategicVerdict::Wait),
            "WAIT_PRICE_DROP" => Some(StrategicVerdict::WaitPriceDrop),
            "OVERPRICED" => Some(StrategicVerdict::Overpriced),
            _ => None,
        }
    }
}

/// Badge keys, used to look up display strings.
pub trait BadgeKey {
    fn key(&self) -> &'static str;
}

impl BadgeKey for PriceTier {
    fn key(&self) -> &'static str {
        match self {
            PriceTier::Excellent => "price_excellent",
            PriceTier::Good => "price_good",
            PriceTier::Weak => "price_weak",
        }
    }
}

impl BadgeKey for TimingBadge {
    fn key(&self) -> &'static str {
        match self {
            TimingBadge::Wait => "timing_wait",
            TimingBadge::MayRise => "timing_may_rise",
            TimingBadge::Stable => "timing_stable",
        }
    }
}

impl BadgeKey for TrustBadge {
    fn key(&self) -> &'static str {
        match self {
            TrustBadge::Risk => "trust_risk",
            TrustBadge::Safe => "trust_safe",
        }
    }
}

impl BadgeKey for BehaviorBadge {
    fn key(&self) -> &'static str {
        match self {
            BehaviorBadge::Suitable => "behavior_suitable",
            BehaviorBadge::General => "behavior_general",
        }
    }
}

impl BadgeKey for StrategicVerdict {
    fn key(&self) -> &'static str {
        match self {
            StrategicVerdict::BuyNow => "verdict_buy_now",
            StrategicVerdict::Wait => "verdict_wait",
            StrategicVerdict::WaitPriceDrop => "verdict_wait_price_drop",
            StrategicVerdict::Overpriced => "verdict_overpriced",
        }
    }
}

/// Every badge shown on a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badges {
    pub price: PriceTier,
    pub timing: TimingBadge,
    pub trust: TrustBadge,
    pub behavior: BehaviorBadge,
    pub verdict: Option<StrategicVerdict>,
}

impl Badges {
    /// Keys of all badges present, in card order.
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys = vec![
            self.price.key(),
            self.timing.key(),
            self.trust.key(),
            self.behavior.key(),
        ];
        if let Some(verdict) = &self.verdict {
            keys.push(verdict.key());
        }
        keys
    }
}
