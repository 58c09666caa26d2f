//! JSON to DynamoDB `AttributeValue` encoding.
//!
//! Converts an arbitrary parsed JSON value (scalar, null, array, or
//! object, nested to any depth) into DynamoDB's tagged attribute-value
//! representation. The transform is pure and fail-fast: the first
//! offending value aborts the whole encode with an error naming its
//! path, and no partial tree is returned.
//!
//! Two rules are worth calling out:
//!
//! - **Empty strings encode as NULL.** `""` and `null` both map to
//!   `AttributeValue::Null(true)`, so an explicit empty string cannot be
//!   round-tripped through this encoding. This matches the wire format's
//!   historical rejection of empty string attributes and is deliberate.
//! - **Numbers encode as decimal text.** DynamoDB represents numbers as
//!   strings on the wire; integers and floats both render through
//!   `serde_json::Number`'s `Display`, which is exact for integers and
//!   shortest-round-trip for floats.
//!
//! Recursion depth is bounded by a caller-configurable limit
//! ([`DEFAULT_MAX_DEPTH`] unless overridden) so adversarial input cannot
//! exhaust the stack.

mod error;

pub use error::{EncodeError, Result};

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::Value;

/// Nesting depth allowed by the plain `encode_*` entry points.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Encodes a single JSON value into an `AttributeValue`.
pub fn encode_value(value: &Value) -> Result<AttributeValue> {
    encode_value_with_limit(value, DEFAULT_MAX_DEPTH)
}

/// Encodes a single JSON value, bounding recursion at `max_depth`.
pub fn encode_value_with_limit(value: &Value, max_depth: usize) -> Result<AttributeValue> {
    let mut path = Vec::new();
    encode_at(value, &mut path, max_depth)
}

/// Encodes a top-level seed item into a DynamoDB item map.
///
/// The value must be a JSON object; anything else fails with
/// [`EncodeError::TypeMismatch`].
pub fn encode_item(item: &Value) -> Result<HashMap<String, AttributeValue>> {
    encode_item_with_limit(item, DEFAULT_MAX_DEPTH)
}

/// Encodes a top-level seed item, bounding recursion at `max_depth`.
pub fn encode_item_with_limit(
    item: &Value,
    max_depth: usize,
) -> Result<HashMap<String, AttributeValue>> {
    let entries = match item {
        Value::Object(entries) => entries,
        other => {
            return Err(EncodeError::TypeMismatch {
                path: render_path(&[]),
                found: kind_name(other),
            })
        }
    };

    let mut attributes = HashMap::with_capacity(entries.len());
    let mut path = Vec::new();
    for (key, value) in entries {
        path.push(Segment::Key(key));
        attributes.insert(key.clone(), encode_at(value, &mut path, max_depth)?);
        path.pop();
    }
    Ok(attributes)
}

/// One step of the path from the root to the value being encoded.
enum Segment<'a> {
    Key(&'a str),
    Index(usize),
}

fn encode_at<'a>(
    value: &'a Value,
    path: &mut Vec<Segment<'a>>,
    max_depth: usize,
) -> Result<AttributeValue> {
    if path.len() > max_depth {
        return Err(EncodeError::DepthLimitExceeded {
            path: render_path(path),
            limit: max_depth,
        });
    }

    match value {
        Value::Null => Ok(AttributeValue::Null(true)),
        // Empty strings collapse into NULL, see the module docs.
        Value::String(s) if s.is_empty() => Ok(AttributeValue::Null(true)),
        Value::Bool(b) => Ok(AttributeValue::Bool(*b)),
        Value::Number(n) => Ok(AttributeValue::N(n.to_string())),
        Value::String(s) => Ok(AttributeValue::S(s.clone())),
        Value::Array(elements) => {
            let mut list = Vec::with_capacity(elements.len());
            for (i, element) in elements.iter().enumerate() {
                path.push(Segment::Index(i));
                list.push(encode_at(element, path, max_depth)?);
                path.pop();
            }
            Ok(AttributeValue::L(list))
        }
        Value::Object(entries) => {
            let mut map = HashMap::with_capacity(entries.len());
            for (key, entry) in entries {
                path.push(Segment::Key(key));
                map.insert(key.clone(), encode_at(entry, path, max_depth)?);
                path.pop();
            }
            Ok(AttributeValue::M(map))
        }
    }
}

fn render_path(segments: &[Segment<'_>]) -> String {
    let mut rendered = String::from("$");
    for segment in segments {
        match segment {
            Segment::Key(key) => {
                rendered.push('.');
                rendered.push_str(key);
            }
            Segment::Index(i) => {
                rendered.push_str(&format!("[{i}]"));
            }
        }
    }
    rendered
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_encodes_as_null() {
        assert_eq!(
            encode_value(&Value::Null).unwrap(),
            AttributeValue::Null(true)
        );
    }

    #[test]
    fn test_empty_string_encodes_as_null() {
        assert_eq!(
            encode_value(&json!("")).unwrap(),
            AttributeValue::Null(true)
        );
    }

    #[test]
    fn test_booleans_encode_directly() {
        assert_eq!(
            encode_value(&json!(true)).unwrap(),
            AttributeValue::Bool(true)
        );
        assert_eq!(
            encode_value(&json!(false)).unwrap(),
            AttributeValue::Bool(false)
        );
    }

    #[test]
    fn test_non_empty_string_encodes_as_string() {
        assert_eq!(
            encode_value(&json!("hello")).unwrap(),
            AttributeValue::S("hello".to_string())
        );
    }

    #[test]
    fn test_integers_encode_as_decimal_text() {
        assert_eq!(
            encode_value(&json!(42)).unwrap(),
            AttributeValue::N("42".to_string())
        );
        assert_eq!(
            encode_value(&json!(-7)).unwrap(),
            AttributeValue::N("-7".to_string())
        );
        assert_eq!(
            encode_value(&json!(u64::MAX)).unwrap(),
            AttributeValue::N(u64::MAX.to_string())
        );
    }

    #[test]
    fn test_floats_encode_as_round_trippable_decimal_text() {
        let cases = [1.5_f64, -0.25, 1e30, 0.1];
        for f in cases {
            let encoded = encode_value(&json!(f)).unwrap();
            let AttributeValue::N(text) = encoded else {
                panic!("expected N variant for {f}");
            };
            assert_eq!(text.parse::<f64>().unwrap(), f);
        }
        assert_eq!(
            encode_value(&json!(1.5)).unwrap(),
            AttributeValue::N("1.5".to_string())
        );
    }

    #[test]
    fn test_list_preserves_length_and_order() {
        let encoded = encode_value(&json!(["a", 1, true])).unwrap();
        assert_eq!(
            encoded,
            AttributeValue::L(vec![
                AttributeValue::S("a".to_string()),
                AttributeValue::N("1".to_string()),
                AttributeValue::Bool(true),
            ])
        );
    }

    #[test]
    fn test_map_preserves_key_set() {
        let encoded = encode_value(&json!({ "x": 1, "y": "z" })).unwrap();
        let AttributeValue::M(map) = encoded else {
            panic!("expected M variant");
        };
        assert_eq!(map.len(), 2);
        assert_eq!(map["x"], AttributeValue::N("1".to_string()));
        assert_eq!(map["y"], AttributeValue::S("z".to_string()));
    }

    #[test]
    fn test_nested_structure_encodes_recursively() {
        let encoded =
            encode_value(&json!({ "a": 1.5, "b": ["x", "", null], "c": { "d": true } })).unwrap();
        let AttributeValue::M(map) = encoded else {
            panic!("expected M variant");
        };
        assert_eq!(map["a"], AttributeValue::N("1.5".to_string()));
        assert_eq!(
            map["b"],
            AttributeValue::L(vec![
                AttributeValue::S("x".to_string()),
                AttributeValue::Null(true),
                AttributeValue::Null(true),
            ])
        );
        assert_eq!(
            map["c"],
            AttributeValue::M(HashMap::from([(
                "d".to_string(),
                AttributeValue::Bool(true)
            )]))
        );
    }

    #[test]
    fn test_encode_item_requires_object() {
        let err = encode_item(&json!(["not", "an", "object"])).unwrap_err();
        assert_eq!(
            err,
            EncodeError::TypeMismatch {
                path: "$".to_string(),
                found: "array",
            }
        );
    }

    #[test]
    fn test_encode_item_produces_attribute_map() {
        let attributes = encode_item(&json!({ "id": "1", "age": 30 })).unwrap();
        assert_eq!(attributes.len(), 2);
        assert_eq!(attributes["id"], AttributeValue::S("1".to_string()));
        assert_eq!(attributes["age"], AttributeValue::N("30".to_string()));
    }

    #[test]
    fn test_depth_limit_fails_fast_with_path() {
        let err = encode_value_with_limit(&json!({ "a": [[1]] }), 2).unwrap_err();
        assert_eq!(
            err,
            EncodeError::DepthLimitExceeded {
                path: "$.a[0][0]".to_string(),
                limit: 2,
            }
        );
    }

    #[test]
    fn test_container_failure_discards_whole_encode() {
        // The failing element sits after two valid ones; the whole list
        // encode must surface that element's error unchanged.
        let value = json!([1, 2, { "deep": [[[1]]] }]);
        let err = encode_value_with_limit(&value, 3).unwrap_err();
        assert!(matches!(err, EncodeError::DepthLimitExceeded { .. }));
    }

    #[test]
    fn test_deeply_nested_within_limit_encodes() {
        let value = json!({ "a": { "b": { "c": [ { "d": "leaf" } ] } } });
        assert!(encode_value(&value).is_ok());
    }
}
