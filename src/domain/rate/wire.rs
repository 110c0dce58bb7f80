//! Wire types for the last-10 rates endpoint.
//!
//! The upstream is untrusted: rates arrive as JSON numbers or as numeric
//! strings, and the payload shape is checked here before anything else
//! touches it.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};

/// A rate field as sent by the backend: `4.62` or `"4.62"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

impl std::fmt::Display for RawNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawNumber::Number(n) => write!(f, "{}", n),
            RawNumber::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for RawNumber {
    fn from(s: &str) -> Self {
        RawNumber::Text(s.to_string())
    }
}

impl From<f64> for RawNumber {
    fn from(n: f64) -> Self {
        RawNumber::Number(n)
    }
}

/// One observation from the BOC rates API. Extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRateRecord {
    pub buying_rate: RawNumber,
    pub selling_rate: RawNumber,
    pub timestamp: String,
}

/// Validate the response body shape: a JSON array of rate records.
pub fn parse_batch(value: serde_json::Value) -> Result<Vec<RawRateRecord>, ParseError> {
    let items = match value {
        serde_json::Value::Array(items) => items,
        other => {
            return Err(ParseError::Schema(format!(
                "expected an array of rate records, got {}",
                json_kind(&other)
            )))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<RawRateRecord>(item)
                .map_err(|e| ParseError::Schema(format!("record {index}: {e}")))
        })
        .collect()
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_batch_accepts_strings_and_numbers() {
        let body = json!([
            {"buying_rate": "4.62", "selling_rate": 4.88, "timestamp": "2024-03-01T09:05:00Z", "id": 7},
        ]);
        let batch = parse_batch(body).unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].buying_rate, RawNumber::Text("4.62".into()));
        assert_eq!(batch[0].selling_rate, RawNumber::Number(4.88));
        assert_eq!(batch[0].timestamp, "2024-03-01T09:05:00Z");
    }

    #[test]
    fn test_parse_batch_empty_array() {
        assert!(parse_batch(json!([])).unwrap().is_empty());
    }

    #[test]
    fn test_parse_batch_rejects_non_array() {
        let err = parse_batch(json!({"rates": []})).unwrap_err();
        assert_eq!(
            err,
            ParseError::Schema("expected an array of rate records, got an object".into())
        );
    }

    #[test]
    fn test_parse_batch_names_bad_record() {
        let body = json!([
            {"buying_rate": "4.62", "selling_rate": "4.88", "timestamp": "2024-03-01T09:05:00Z"},
            {"buying_rate": "4.61", "timestamp": "2024-03-01T09:00:00Z"},
        ]);
        match parse_batch(body).unwrap_err() {
            ParseError::Schema(msg) => {
                assert!(msg.starts_with("record 1:"), "{msg}");
                assert!(msg.contains("selling_rate"), "{msg}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_batch_rejects_wrong_field_type() {
        let body = json!([{"buying_rate": true, "selling_rate": "4.88", "timestamp": "x"}]);
        assert!(matches!(parse_batch(body), Err(ParseError::Schema(_))));
    }
}
