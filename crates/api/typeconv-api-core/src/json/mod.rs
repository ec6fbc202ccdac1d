use serde_json::{json, Map, Value as JsonValue};
use thiserror::Error;

use crate::primitive::PrimitiveKind;
use crate::Value;

/// Policy describing how bare JSON arrays made only of numbers are normalized
/// when converting shorthand JSON into the canonical `{ "type": ..., "data": ... }`
/// representation used by [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumericArrayPolicy {
    /// Every JSON array becomes an ordered `list` of individually tagged values.
    #[default]
    List,
    /// Purely numeric arrays become primitive arrays: `i64` when every entry
    /// is an integer, `f64` otherwise. Mixed arrays still become lists.
    Primitive,
}

/// Errors produced while reading value JSON from text.
#[derive(Debug, Error)]
pub enum JsonError {
    #[error("value json parse error: {0}")]
    Parse(String),
    #[error("value json decode error: {0}")]
    Decode(String),
}

/// Shorthand object keys naming primitive arrays, e.g. `{ "i32[]": [1, 2] }`.
const PRIMITIVE_KINDS: [PrimitiveKind; 14] = [
    PrimitiveKind::Bool,
    PrimitiveKind::Char,
    PrimitiveKind::I8,
    PrimitiveKind::I16,
    PrimitiveKind::I32,
    PrimitiveKind::I64,
    PrimitiveKind::U8,
    PrimitiveKind::U16,
    PrimitiveKind::U32,
    PrimitiveKind::U64,
    PrimitiveKind::F32,
    PrimitiveKind::F64,
    PrimitiveKind::Complex32,
    PrimitiveKind::Complex64,
];

/// Normalize shorthand `Value` JSON into the canonical tagged representation
/// understood by the serde derives on [`Value`]. Accepts primitive aliases
/// (`1`, `2.5`, `true`, `"1,2"`, `null`, `[..]`) as well as shorthand objects
/// such as `{ "set": [1, 2] }` or `{ "f32[]": [0.5, 1.5] }`.
pub fn normalize_value_json(value: JsonValue) -> JsonValue {
    normalize_value_json_with_policy(value, NumericArrayPolicy::List)
}

pub fn normalize_value_json_with_policy(value: JsonValue, policy: NumericArrayPolicy) -> JsonValue {
    match value {
        JsonValue::Null => json!({ "type": "null" }),
        JsonValue::Number(n) => {
            if n.is_i64() {
                json!({ "type": "int", "data": n })
            } else {
                json!({ "type": "float", "data": n })
            }
        }
        JsonValue::Bool(b) => json!({ "type": "bool", "data": b }),
        JsonValue::String(s) => json!({ "type": "text", "data": s }),
        JsonValue::Array(arr) => {
            let all_numbers = !arr.is_empty() && arr.iter().all(|x| x.is_number());
            match policy {
                NumericArrayPolicy::Primitive if all_numbers => {
                    let kind = if arr.iter().all(|x| x.is_i64()) {
                        PrimitiveKind::I64
                    } else {
                        PrimitiveKind::F64
                    };
                    primitive_array_json(kind, arr)
                }
                _ => json!({ "type": "list", "data": normalize_items(arr, policy) }),
            }
        }
        JsonValue::Object(obj) => normalize_object(obj, policy),
    }
}

fn normalize_items(items: Vec<JsonValue>, policy: NumericArrayPolicy) -> Vec<JsonValue> {
    items
        .into_iter()
        .map(|item| normalize_value_json_with_policy(item, policy))
        .collect()
}

fn primitive_array_json(kind: PrimitiveKind, items: Vec<JsonValue>) -> JsonValue {
    json!({ "type": "array", "data": { "kind": kind.name(), "items": items } })
}

fn normalize_object(obj: Map<String, JsonValue>, policy: NumericArrayPolicy) -> JsonValue {
    if obj.contains_key("type") {
        return JsonValue::Object(obj);
    }
    if let Some(text) = obj.get("text").and_then(|x| x.as_str()) {
        return json!({ "type": "text", "data": text });
    }
    if let Some(i) = obj.get("int").and_then(|x| x.as_i64()) {
        return json!({ "type": "int", "data": i });
    }
    if let Some(f) = obj.get("float").and_then(|x| x.as_f64()) {
        return json!({ "type": "float", "data": f });
    }
    if let Some(b) = obj.get("bool").and_then(|x| x.as_bool()) {
        return json!({ "type": "bool", "data": b });
    }
    if let Some(c) = obj.get("char").and_then(|x| x.as_str()) {
        return json!({ "type": "char", "data": c });
    }
    for (key, tag) in [("list", "list"), ("set", "set"), ("objects", "objects")] {
        if let Some(items) = obj.get(key).and_then(|x| x.as_array()) {
            return json!({ "type": tag, "data": normalize_items(items.clone(), policy) });
        }
    }
    for kind in PRIMITIVE_KINDS {
        let key = format!("{}[]", kind.name());
        if let Some(items) = obj.get(&key).and_then(|x| x.as_array()) {
            return primitive_array_json(kind, items.clone());
        }
    }

    JsonValue::Object(obj)
}

/// Convenience helper that normalizes Value JSON then deserializes it into the
/// strongly typed [`Value`] enum.
pub fn parse_value(value: JsonValue) -> Result<Value, serde_json::Error> {
    parse_value_with_policy(value, NumericArrayPolicy::List)
}

pub fn parse_value_with_policy(
    value: JsonValue,
    policy: NumericArrayPolicy,
) -> Result<Value, serde_json::Error> {
    let normalized = normalize_value_json_with_policy(value, policy);
    serde_json::from_value(normalized)
}

/// Parse shorthand Value JSON from text.
pub fn parse_value_str(text: &str) -> Result<Value, JsonError> {
    let raw: JsonValue = serde_json::from_str(text).map_err(|e| JsonError::Parse(e.to_string()))?;
    parse_value(raw).map_err(|e| JsonError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PrimitiveArray;

    #[test]
    fn normalize_scalars() {
        assert_eq!(normalize_value_json(json!(3))["type"], "int");
        assert_eq!(normalize_value_json(json!(3.5))["type"], "float");
        assert_eq!(normalize_value_json(json!("1;2"))["type"], "text");
        assert_eq!(normalize_value_json(JsonValue::Null), json!({ "type": "null" }));
    }

    #[test]
    fn numeric_arrays_follow_policy() {
        let as_list = normalize_value_json(json!([1, 2, 3]));
        assert_eq!(as_list["type"], "list");
        assert_eq!(as_list["data"][0]["type"], "int");

        let ints = normalize_value_json_with_policy(json!([1, 2]), NumericArrayPolicy::Primitive);
        assert_eq!(ints["data"]["kind"], "i64");

        let floats =
            normalize_value_json_with_policy(json!([1, 2.5]), NumericArrayPolicy::Primitive);
        assert_eq!(floats["data"]["kind"], "f64");

        let mixed =
            normalize_value_json_with_policy(json!([1, "2"]), NumericArrayPolicy::Primitive);
        assert_eq!(mixed["type"], "list");
    }

    #[test]
    fn parse_shorthand_objects() {
        let parsed = parse_value(json!({ "set": [1, "2", { "float": 0.5 }] })).expect("parse set");
        assert_eq!(
            parsed,
            Value::Set(vec![Value::Int(1), Value::text("2"), Value::Float(0.5)])
        );

        let parsed = parse_value(json!({ "u8[]": [1, 255] })).expect("parse u8 array");
        assert_eq!(parsed, Value::Array(PrimitiveArray::from(vec![1u8, 255])));

        let parsed = parse_value(json!({ "complex64[]": [[1.0, 2.0]] })).expect("parse complex");
        assert_eq!(
            parsed,
            Value::Array(PrimitiveArray::from(vec![[1.0f64, 2.0]]))
        );

        let parsed = parse_value(json!({ "char[]": ["a", "b"] })).expect("parse chars");
        assert_eq!(parsed, Value::array(vec!['a', 'b']));
    }

    #[test]
    fn canonical_json_passes_through() {
        let canonical = json!({ "type": "objects", "data": [{ "type": "int", "data": 4 }] });
        assert_eq!(normalize_value_json(canonical.clone()), canonical);
        let parsed = parse_value(canonical).unwrap();
        assert_eq!(parsed, Value::objects([4]));
    }

    #[test]
    fn parse_from_text_reports_stage() {
        assert!(matches!(parse_value_str("[1, "), Err(JsonError::Parse(_))));
        assert!(matches!(
            parse_value_str(r#"{ "type": "bogus" }"#),
            Err(JsonError::Decode(_))
        ));
        assert_eq!(
            parse_value_str("[true, null]").unwrap(),
            Value::list([Value::Bool(true), Value::Null])
        );
    }
}
