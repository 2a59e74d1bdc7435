//! Conversion between JSON request/response payloads and BSON documents.
//!
//! Incoming bodies are stored as-is apart from number narrowing: integers
//! that fit in 32 bits become `Int32`, larger ones `Int64`, everything else
//! `Double`. Outgoing documents are rendered as plain JSON rather than
//! extended JSON, so ObjectIds appear as hex strings and datetimes as
//! RFC 3339 strings.

use bson::{Bson, Document};
use serde_json::{Map, Number, Value};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Convert a JSON request body into a BSON document.
///
/// The body must be a JSON object; arrays, strings and other scalars are
/// rejected with [`CoreError::InvalidDocument`].
pub fn json_to_document(value: Value) -> Result<Document, CoreError> {
    match value {
        Value::Object(map) => Ok(object_to_document(map)),
        other => Err(CoreError::InvalidDocument(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

/// Render a stored document as plain JSON.
pub fn document_to_json(doc: Document) -> Value {
    let map: Map<String, Value> = doc
        .into_iter()
        .map(|(key, value)| (key, bson_to_json(value)))
        .collect();
    Value::Object(map)
}

/// Render a single BSON value as plain JSON.
pub fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::Null | Bson::Undefined => Value::Null,
        Bson::Boolean(b) => Value::Bool(b),
        Bson::Int32(n) => Value::from(n),
        Bson::Int64(n) => Value::from(n),
        Bson::Double(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
        Bson::String(s) => Value::String(s),
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => {
            let ts: Timestamp = dt.to_chrono();
            Value::String(ts.to_rfc3339())
        }
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        Bson::Document(doc) => document_to_json(doc),
        other => other.into_relaxed_extjson(),
    }
}

fn object_to_document(map: Map<String, Value>) -> Document {
    map.into_iter()
        .map(|(key, value)| (key, json_to_bson(value)))
        .collect()
}

fn json_to_bson(value: Value) -> Bson {
    match value {
        Value::Null => Bson::Null,
        Value::Bool(b) => Bson::Boolean(b),
        Value::Number(n) => number_to_bson(&n),
        Value::String(s) => Bson::String(s),
        Value::Array(items) => Bson::Array(items.into_iter().map(json_to_bson).collect()),
        Value::Object(map) => Bson::Document(object_to_document(map)),
    }
}

fn number_to_bson(n: &Number) -> Bson {
    if let Some(i) = n.as_i64() {
        return match i32::try_from(i) {
            Ok(small) => Bson::Int32(small),
            Err(_) => Bson::Int64(i),
        };
    }
    // u64 beyond i64::MAX and all fractional values.
    Bson::Double(n.as_f64().unwrap_or(f64::NAN))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
