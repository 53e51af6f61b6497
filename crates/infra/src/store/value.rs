//! Firestore value codec
//!
//! The REST API wraps every field in a typed `Value` object
//! (`{"stringValue": ...}`, `{"integerValue": "42"}`, ...). This module
//! maps those losslessly to plain `serde_json::Value`s so the domain types
//! round-trip through their ordinary serde derives. Timestamps travel as
//! RFC 3339 strings on the plain side; strings that parse as RFC 3339 are
//! written back as `timestampValue`.

use serde_json::{json, Map, Value};

use super::errors::StoreError;

/// Encode a plain JSON value as a Firestore `Value`
pub fn encode_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                json!({ "integerValue": i.to_string() })
            } else {
                json!({ "doubleValue": n.as_f64() })
            }
        }
        Value::String(s) => {
            if chrono::DateTime::parse_from_rfc3339(s).is_ok() {
                json!({ "timestampValue": s })
            } else {
                json!({ "stringValue": s })
            }
        }
        Value::Array(items) => {
            let values: Vec<Value> = items.iter().map(encode_value).collect();
            json!({ "arrayValue": { "values": values } })
        }
        Value::Object(map) => json!({ "mapValue": { "fields": encode_fields(map) } }),
    }
}

/// Encode every field of a plain JSON object
pub fn encode_fields(object: &Map<String, Value>) -> Map<String, Value> {
    object.iter().map(|(key, value)| (key.clone(), encode_value(value))).collect()
}

/// Decode a Firestore `Value` into a plain JSON value
pub fn decode_value(value: &Value) -> Result<Value, StoreError> {
    let map = value
        .as_object()
        .ok_or_else(|| StoreError::Decode("expected a Firestore value object".to_string()))?;
    let (kind, inner) = map
        .iter()
        .next()
        .ok_or_else(|| StoreError::Decode("empty Firestore value object".to_string()))?;

    match kind.as_str() {
        "nullValue" => Ok(Value::Null),
        "booleanValue" | "doubleValue" | "stringValue" | "timestampValue" | "referenceValue" => {
            Ok(inner.clone())
        }
        "integerValue" => {
            let parsed = match inner {
                Value::String(s) => s
                    .parse::<i64>()
                    .map_err(|err| StoreError::Decode(format!("bad integerValue: {err}")))?,
                Value::Number(n) => n.as_i64().ok_or_else(|| {
                    StoreError::Decode("integerValue outside i64 range".to_string())
                })?,
                other => {
                    return Err(StoreError::Decode(format!("bad integerValue: {other}")));
                }
            };
            Ok(json!(parsed))
        }
        "arrayValue" => {
            let items = inner.get("values").and_then(Value::as_array).cloned().unwrap_or_default();
            let decoded: Result<Vec<Value>, StoreError> = items.iter().map(decode_value).collect();
            Ok(Value::Array(decoded?))
        }
        "mapValue" => {
            let fields = inner
                .get("fields")
                .and_then(Value::as_object)
                .cloned()
                .unwrap_or_default();
            Ok(Value::Object(decode_fields(&fields)?))
        }
        other => Err(StoreError::Decode(format!("unsupported Firestore value kind: {other}"))),
    }
}

/// Decode every field of a Firestore `fields` map
pub fn decode_fields(fields: &Map<String, Value>) -> Result<Map<String, Value>, StoreError> {
    fields
        .iter()
        .map(|(key, value)| Ok((key.clone(), decode_value(value)?)))
        .collect()
}
