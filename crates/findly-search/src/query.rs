//! Search request construction.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::settings::{Language, UserSettings};

/// A search against the Findly API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Trimmed user query.
    pub query: String,
    pub language: Language,
    pub user_id: String,
}

impl SearchRequest {
    /// Build a request from the raw input box text and the user's settings.
    pub fn new(raw_query: &str, settings: &UserSettings) -> Result<Self, SearchError> {
        let query = raw_query.trim();
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        Ok(Self {
            query: query.to_string(),
            language: settings.language,
            user_id: settings.user_id().to_string(),
        })
    }

    /// Query string without the leading `?`.
    pub fn to_query_string(&self) -> String {
        format!(
            "q={}&lang={}&uid={}",
            encode_component(&self.query),
            self.language.code(),
            encode_component(&self.user_id)
        )
    }

    /// Full URL of the search endpoint under `base_url`.
    pub fn to_url(&self, base_url: &str) -> String {
        format!(
            "{}/search?{}",
            base_url.trim_end_matches('/'),
            self.to_query_string()
        )
    }
}

/// Percent-encode a URL component.
///
/// Leaves the same characters unescaped as a browser's
/// `encodeURIComponent`: ASCII alphanumerics and `-_.!~*'()`.
fn encode_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());

    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_rejected() {
        let settings = UserSettings::default();
        assert!(matches!(
            SearchRequest::new("   ", &settings),
            Err(SearchError::EmptyQuery)
        ));
    }

    #[test]
    fn test_to_url() {
        let settings = UserSettings {
            language: Language::En,
            user_id: Some("u-1".to_string()),
            ..Default::default()
        };
        let request = SearchRequest::new("  iphone 15 pro ", &settings).unwrap();

        assert_eq!(
            request.to_url("https://api.findly.example/"),
            "https://api.findly.example/search?q=iphone%2015%20pro&lang=en&uid=u-1"
        );
    }

    #[test]
    fn test_guest_uid_by_default() {
        let request = SearchRequest::new("tv", &UserSettings::default()).unwrap();
        assert_eq!(request.to_query_string(), "q=tv&lang=ar&uid=guest");
    }

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_component("it's (new)!"), "it's%20(new)!");
        assert_eq!(encode_component("\u{0647}\u{0627}\u{062A}\u{0641}"), "%D9%87%D8%A7%D8%AA%D9%81");
    }
}
