//! CLI configuration.

use anyhow::{Context, Result};
use findly_commerce::Currency;
use findly_search::{BadgePolicy, UserSettings};
use serde::{Deserialize, Serialize};

/// Config file names looked up from the working directory upwards.
pub const CONFIG_NAMES: [&str; 3] = ["findly.toml", ".findly.toml", "findly.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Search API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Settings the browser kept in local storage.
    #[serde(default)]
    pub user: UserSettings,

    /// Badge thresholds.
    #[serde(default)]
    pub badges: BadgePolicy,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Problems that make the config unusable.
    pub fn problems(&self) -> Vec<String> {
        let mut problems: Vec<String> = self
            .badges
            .problems()
            .into_iter()
            .map(|p| format!("badges.{}", p))
            .collect();

        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://")
        {
            problems.push("api.base_url must be an http(s) URL".to_string());
        }

        if !self.user.budget.is_finite() || self.user.budget < 0.0 {
            problems.push("user.budget must be zero or a positive amount".to_string());
        }

        problems
    }
}

/// Search API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the search API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Currency prices are quoted in.
    #[serde(default)]
    pub currency: Currency,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            currency: Currency::default(),
        }
    }
}

/// Contents written by `findly config init`.
pub fn generate_default_config() -> String {
    r#"# Findly CLI configuration

[api]
base_url = "http://localhost:3000"
currency = "USD"

[user]
# Spending limit; 0 disables the over-budget warning.
budget = 0.0
# user_id = "guest"
language = "ar"

[badges]
excellent_price_score = 70.0
good_price_score = 50.0
risk_score_threshold = 50.0
"#
    .to_string()
}
