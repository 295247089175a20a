//! Conversions between request/response JSON and stored BSON documents.

use mongodb::bson::{self, oid::ObjectId, Bson, Document};
use serde_json::{Map, Value};

use crate::error::{ApiError, Result};

/// Turns a request body into a document. Only JSON objects are accepted, and
/// no field name may start with `$` (MongoDB reserves those for operators).
pub fn from_json(body: Value) -> Result<Document> {
    if !body.is_object() {
        return Err(ApiError::BadRequest(
            "request body must be a JSON object".to_string(),
        ));
    }
    let document =
        bson::to_document(&body).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    check_field_names(&document)?;
    Ok(document)
}

fn check_field_names(document: &Document) -> Result<()> {
    for (key, value) in document {
        if key.starts_with('$') {
            return Err(ApiError::BadRequest(format!(
                "field name '{}' must not start with '$'",
                key
            )));
        }
        check_nested_names(value)?;
    }
    Ok(())
}

fn check_nested_names(value: &Bson) -> Result<()> {
    match value {
        Bson::Document(doc) => check_field_names(doc),
        Bson::Array(items) => items.iter().try_for_each(check_nested_names),
        _ => Ok(()),
    }
}

/// Renders a stored document for clients. ObjectIds become hex strings and
/// dates become RFC 3339 strings; everything else uses relaxed extended JSON.
pub fn to_json(document: Document) -> Value {
    let map: Map<String, Value> = document
        .into_iter()
        .map(|(key, value)| (key, bson_to_json(value)))
        .collect();
    Value::Object(map)
}

pub fn to_json_array(documents: Vec<Document>) -> Value {
    Value::Array(documents.into_iter().map(to_json).collect())
}

fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::Document(doc) => to_json(doc),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        Bson::DateTime(dt) => match dt.try_to_rfc3339_string() {
            Ok(s) => Value::String(s),
            Err(_) => Bson::DateTime(dt).into_relaxed_extjson(),
        },
        other => other.into_relaxed_extjson(),
    }
}

/// Parses a path id into an ObjectId.
pub fn parse_id(id: &str) -> Result<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| ApiError::InvalidId(id.to_string()))
}

/// Sets `key` to `value` only when the document does not already carry it.
pub fn insert_default(document: &mut Document, key: &str, value: impl Into<Bson>) {
    if !document.contains_key(key) {
        document.insert(key, value.into());
    }
}
