//! Diagnostic JSON rendering of extracted trees.
//!
//! Lossy by design: binary payloads become
//! `data:application/octet-stream;base64,` strings, tagged blobs become
//! `{tag, payload}` objects, time pairs become `{secs, nsecs}` objects.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::{json, Map, Value};

use crate::{TimePair, TreeValue};

const DATA_URI_PREFIX: &str = "data:application/octet-stream;base64,";

/// Renders one tree value as JSON.
pub fn tree_to_json(value: &TreeValue) -> Value {
    match value {
        TreeValue::Str(s) => Value::String(s.clone()),
        TreeValue::Bool(b) => Value::Bool(*b),
        TreeValue::Integer(i) => json!(*i),
        TreeValue::Float(f) => json!(*f),
        TreeValue::Time(TimePair { secs, nsecs }) => json!({ "secs": secs, "nsecs": nsecs }),
        TreeValue::Bytes(b) => Value::String(bin_to_data_uri(b)),
        TreeValue::BoolArray(v) => Value::Array(v.iter().map(|b| Value::Bool(*b)).collect()),
        TreeValue::Blob(blob) => json!({
            "tag": blob.tag,
            "payload": bin_to_data_uri(&blob.payload),
        }),
        TreeValue::Array(items) => Value::Array(items.iter().map(tree_to_json).collect()),
        TreeValue::Map(fields) => fields_to_json(fields),
    }
}

/// Renders a whole extracted mapping as a JSON object, preserving field
/// order.
pub fn fields_to_json(fields: &[(String, TreeValue)]) -> Value {
    let mut map = Map::new();
    for (key, value) in fields {
        map.insert(key.clone(), tree_to_json(value));
    }
    Value::Object(map)
}

fn bin_to_data_uri(data: &[u8]) -> String {
    format!("{DATA_URI_PREFIX}{}", STANDARD.encode(data))
}
