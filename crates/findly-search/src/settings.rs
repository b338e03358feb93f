//! Per-user settings read once per search.
//!
//! In the browser these lived in local storage; here they are an explicit
//! value handed to the request builder and the card builder.

use findly_commerce::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// User id sent when none is stored.
pub const GUEST_USER_ID: &str = "guest";

/// Interface languages the search API understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ar,
    En,
    Fr,
    De,
    Es,
    Tr,
}

impl Language {
    /// Parse a language code, falling back to the default for unknown codes.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "ar" => Language::Ar,
            "en" => Language::En,
            "fr" => Language::Fr,
            "de" => Language::De,
            "es" => Language::Es,
            "tr" => Language::Tr,
            _ => Language::default(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
            Language::Fr => "fr",
            Language::De => "de",
            Language::Es => "es",
            Language::Tr => "tr",
        }
    }

    /// Right-to-left script.
    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Ar)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// User settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    /// Spending limit in currency units. Zero or less means no limit.
    #[serde(default)]
    pub budget: f64,

    /// Stored user id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Interface language.
    #[serde(default)]
    pub language: Language,
}

impl UserSettings {
    /// The id to send to the API.
    pub fn user_id(&self) -> &str {
        self.user_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .unwrap_or(GUEST_USER_ID)
    }

    pub fn has_budget(&self) -> bool {
        self.budget.is_finite() && self.budget > 0.0
    }

    /// True when a budget is set and the price is above it.
    pub fn is_over_budget(&self, price: &Money) -> bool {
        self.has_budget() && price.to_decimal() > self.budget
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use findly_commerce::Currency;

    #[test]
    fn test_language_from_code() {
        assert_eq!(Language::from_code("EN"), Language::En);
        assert_eq!(Language::from_code("tr"), Language::Tr);
        assert_eq!(Language::from_code("xx"), Language::Ar);
        assert!(Language::Ar.is_rtl());
        assert!(!Language::Fr.is_rtl());
    }

    #[test]
    fn test_user_id_falls_back_to_guest() {
        let mut settings = UserSettings::default();
        assert_eq!(settings.user_id(), "guest");

        settings.user_id = Some("  ".to_string());
        assert_eq!(settings.user_id(), "guest");

        settings.user_id = Some("u-42".to_string());
        assert_eq!(settings.user_id(), "u-42");
    }

    #[test]
    fn test_over_budget() {
        let settings = UserSettings {
            budget: 100.0,
            ..Default::default()
        };

        assert!(settings.is_over_budget(&Money::new(10001, Currency::USD)));
        assert!(!settings.is_over_budget(&Money::new(10000, Currency::USD)));
    }

    #[test]
    fn test_no_budget_is_never_over() {
        let settings = UserSettings::default();
        assert!(!settings.is_over_budget(&Money::new(999_999, Currency::USD)));
    }
}
