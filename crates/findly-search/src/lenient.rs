//! Forgiving field decoders for API payloads.
//!
//! The search API is loose about types (`"80"` vs `80`). A field of the wrong
//! shape reads as absent instead of failing the whole product.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Number, or a string holding one. Anything else is `None`.
pub(crate) fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite()))
}

/// String, or a number rendered as one. Blank strings are `None`.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// A list, where `null` or any non-array reads as empty.
pub(crate) fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "number")]
        n: Option<f64>,
        #[serde(default, deserialize_with = "text")]
        t: Option<String>,
        #[serde(default, deserialize_with = "list")]
        l: Vec<u32>,
    }

    fn probe(v: serde_json::Value) -> Probe {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn test_number() {
        assert_eq!(probe(json!({"n": 80})).n, Some(80.0));
        assert_eq!(probe(json!({"n": " 72.5 "})).n, Some(72.5));
        assert_eq!(probe(json!({"n": "high"})).n, None);
        assert_eq!(probe(json!({"n": null})).n, None);
        assert_eq!(probe(json!({})).n, None);
    }

    #[test]
    fn test_text() {
        assert_eq!(probe(json!({"t": "Amazon"})).t.as_deref(), Some("Amazon"));
        assert_eq!(probe(json!({"t": 12})).t.as_deref(), Some("12"));
        assert_eq!(probe(json!({"t": "  "})).t, None);
        assert_eq!(probe(json!({"t": {"a": 1}})).t, None);
    }

    #[test]
    fn test_list() {
        assert_eq!(probe(json!({"l": [1, 2]})).l, vec![1, 2]);
        assert_eq!(probe(json!({"l": null})).l, Vec::<u32>::new());
        assert_eq!(probe(json!({"l": "x"})).l, Vec::<u32>::new());
    }
}
