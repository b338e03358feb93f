//! Search glue for Findly results pages.
//!
//! This crate provides:
//! - `SearchRequest` - Query validation and API URL construction
//! - `parse_search_response` - Classification of API replies
//! - `SearchProduct` / `Intelligence` - Result models
//! - `BadgePolicy` - Threshold-based badge selection
//! - `UserSettings` - Budget, user id and language
//! - `CardBuilder` - Per-product card assembly, including coupon pricing

pub mod badges;
pub mod card;
pub mod error;
mod lenient;
pub mod product;
pub mod query;
pub mod response;
pub mod settings;

pub use badges::{
    BadgeKey, BadgePolicy, Badges, BehaviorBadge, PriceTier, StrategicVerdict, TimingBadge,
    TrustBadge,
};
pub use card::{CardBuilder, ProductCard};
pub use error::SearchError;
pub use product::{Intelligence, SearchProduct};
pub use query::SearchRequest;
pub use response::{parse_search_response, SearchOutcome};
pub use settings::{Language, UserSettings};
