//! Request body helpers.

use axum::Json;
use serde_json::{Map, Value};

/// Merges path and caller values into a request body.
///
/// Server-side values win over anything the client sent under the same key.
/// A missing, malformed or non-object body is treated as an empty object so
/// that entity validation reports the missing properties.
pub fn merge_payload(body: Option<Json<Value>>, fields: &[(&str, &str)]) -> Value {
    let mut object = match body {
        Some(Json(Value::Object(map))) => map,
        _ => Map::new(),
    };
    for (key, value) in fields {
        object.insert((*key).to_string(), Value::String((*value).to_string()));
    }
    Value::Object(object)
}
