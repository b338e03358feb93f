//! Search error types.

use thiserror::Error;

/// Errors from building a search request or reading the API reply.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Nothing to search for.
    #[error("Search query is empty")]
    EmptyQuery,

    /// The reply is not the JSON we expect.
    #[error("Malformed search response: {0}")]
    Malformed(String),

    /// The API reported an error and returned no results.
    #[error("Search API error: {0}")]
    Api(String),
}

impl From<serde_json::Error> for SearchError {
    fn from(e: serde_json::Error) -> Self {
        SearchError::Malformed(e.to_string())
    }
}
