//! Classification of search API replies.

use serde::Deserialize;
use serde_json::Value;

use crate::error::SearchError;
use crate::product::SearchProduct;

/// Error code the API sends when the user's search quota is used up.
pub const ENERGY_EMPTY: &str = "ENERGY_EMPTY";

/// What a search reply means for the results page.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Products to show.
    Results(Vec<SearchProduct>),
    /// The search ran but found nothing.
    NoResults,
    /// Quota exhausted; the user should be offered an upgrade.
    EnergyEmpty,
}

impl SearchOutcome {
    pub fn products(&self) -> &[SearchProduct] {
        match self {
            SearchOutcome::Results(products) => products,
            _ => &[],
        }
    }
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    results: Option<Value>,
    #[serde(default)]
    error: Option<Value>,
}

/// Parse a raw reply body.
///
/// Result entries that are not valid products are skipped with a warning.
pub fn parse_search_response(body: &str) -> Result<SearchOutcome, SearchError> {
    let envelope: Envelope = serde_json::from_str(body)?;

    let error = envelope.error.and_then(|e| match e {
        Value::String(s) => Some(s),
        Value::Null => None,
        other => Some(other.to_string()),
    });

    if error.as_deref() == Some(ENERGY_EMPTY) {
        return Ok(SearchOutcome::EnergyEmpty);
    }

    let entries = match envelope.results {
        Some(Value::Array(entries)) if !entries.is_empty() => entries,
        Some(Value::Array(_)) | Some(Value::Null) | None => {
            return match error {
                Some(message) => Err(SearchError::Api(message)),
                None => Ok(SearchOutcome::NoResults),
            };
        }
        Some(other) => {
            return Err(SearchError::Malformed(format!(
                "results is not a list: {}",
                other
            )))
        }
    };

    let total = entries.len();
    let products: Vec<SearchProduct> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(product) => Some(product),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping undecodable search result");
                None
            }
        })
        .collect();

    tracing::debug!(total, decoded = products.len(), "parsed search response");

    if products.is_empty() {
        return Ok(SearchOutcome::NoResults);
    }

    Ok(SearchOutcome::Results(products))
}
