//! List response normalisation
//!
//! List endpoints answer with `{ "items": [..], "totalCount": n }`, a bare
//! array, or occasionally something else entirely. Everything is folded
//! into a `PagedResult`.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// The shapes a list response can take on the wire
#[derive(Debug, Clone, PartialEq)]
pub enum ListShape {
    /// Object with an `items` array and an optional total
    Paged {
        items: Vec<Value>,
        total_count: Option<u64>,
    },
    /// Plain JSON array of records
    Bare(Vec<Value>),
    /// Anything else, kept for diagnostics
    Unrecognized(Value),
}

impl ListShape {
    /// Classify a response body by its outer structure only.
    ///
    /// Records are not looked at here, so one bad record can never turn a
    /// paged response into an unrecognized one.
    pub fn detect(value: Value) -> Self {
        match value {
            Value::Array(items) => ListShape::Bare(items),
            Value::Object(mut map) => match map.remove("items") {
                Some(Value::Array(items)) => ListShape::Paged {
                    items,
                    total_count: map.get("totalCount").and_then(Value::as_u64),
                },
                Some(other) => {
                    map.insert("items".to_string(), other);
                    ListShape::Unrecognized(Value::Object(map))
                }
                None => ListShape::Unrecognized(Value::Object(map)),
            },
            other => ListShape::Unrecognized(other),
        }
    }

    /// Decode the records and collapse the shape into a `PagedResult`.
    ///
    /// A missing total falls back to the number of records received.
    /// Records that fail to decode are logged and skipped.
    pub fn into_paged<T: DeserializeOwned>(self) -> PagedResult<T> {
        match self {
            ListShape::Paged { items, total_count } => {
                let received = items.len() as u64;
                let items = decode_records(items);
                PagedResult {
                    items,
                    total_count: total_count.unwrap_or(received),
                }
            }
            ListShape::Bare(items) => {
                let items = decode_records(items);
                PagedResult {
                    total_count: items.len() as u64,
                    items,
                }
            }
            ListShape::Unrecognized(value) => {
                tracing::warn!(kind = %json_kind(&value), "Unrecognized list response shape");
                PagedResult::default()
            }
        }
    }
}

fn decode_records<T: DeserializeOwned>(raw: Vec<Value>) -> Vec<T> {
    let mut items = Vec::with_capacity(raw.len());
    for (index, record) in raw.into_iter().enumerate() {
        match serde_json::from_value::<T>(record) {
            Ok(item) => items.push(item),
            Err(e) => tracing::warn!(index, error = %e, "Skipping list record that could not be decoded"),
        }
    }
    items
}

/// One page of records plus the server-side total
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
}

impl<T> Default for PagedResult<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
        }
    }
}

impl<T> PagedResult<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Normalise any list response body into a `PagedResult`
pub fn normalize_list<T: DeserializeOwned>(value: Value) -> PagedResult<T> {
    ListShape::detect(value).into_paged()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Customer, Subscription};
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use serde_json::json;

    #[test]
    fn test_paged_shape() {
        let page: PagedResult<Customer> = normalize_list(json!({
            "items": [{"id": "a", "fullName": "Ada"}, {"id": "b", "fullName": "Bob"}],
            "totalCount": 57
        }));
        assert_eq!(page.len(), 2);
        assert_eq!(page.total_count, 57);
        assert_eq!(page.items[1].full_name, "Bob");
    }

    #[test]
    fn test_paged_shape_without_total() {
        let page: PagedResult<Customer> = normalize_list(json!({"items": [{"id": 1}]}));
        assert_eq!(page.total_count, 1);
    }

    #[test]
    fn test_bare_array() {
        let page: PagedResult<Customer> = normalize_list(json!([{"id": 1}, {"id": 2}, {"id": 3}]));
        assert_eq!(page.len(), 3);
        assert_eq!(page.total_count, 3);
    }

    #[test]
    fn test_unrecognized_shapes_are_empty() {
        for body in [json!(null), json!({"result": []}), json!("oops"), json!(12)] {
            let page: PagedResult<Customer> = normalize_list(body);
            assert!(page.is_empty());
            assert_eq!(page.total_count, 0);
        }
    }

    #[test]
    fn test_detect_looks_only_at_outer_shape() {
        assert!(matches!(
            ListShape::detect(json!({"items": [1, 2], "totalCount": 9})),
            ListShape::Paged { total_count: Some(9), .. }
        ));
        assert!(matches!(ListShape::detect(json!(["x"])), ListShape::Bare(_)));
        assert!(matches!(
            ListShape::detect(json!({"items": "nope"})),
            ListShape::Unrecognized(_)
        ));
    }

    #[test]
    fn test_malformed_record_does_not_empty_the_page() {
        let page: PagedResult<Subscription> = normalize_list(json!({
            "items": [
                {"id": 1, "packagePrice": 10, "periodType": 1},
                {"id": 2, "packagePrice": 12.5, "periodType": 4000},
                {"id": 3, "packagePrice": null, "periodType": 1}
            ],
            "totalCount": 3
        }));
        assert_eq!(page.total_count, 3);
        assert_eq!(page.len(), 2);
        assert_eq!(page.items[0].id.as_str(), "1");
        assert_eq!(page.items[1].id.as_str(), "3");
        assert_eq!(page.items[1].package_price, Decimal::ZERO);
    }

    #[test]
    fn test_numeric_creation_time_is_tolerated() {
        let page: PagedResult<Customer> = normalize_list(json!({
            "items": [{"id": "a", "fullName": "Ada", "creationTime": 1721815000}],
            "totalCount": 1
        }));
        assert_eq!(page.len(), 1);
        assert!(page.items[0].creation_time.is_some());
    }
}
