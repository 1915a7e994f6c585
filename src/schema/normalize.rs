//! Parameter normalization
//!
//! Turns a typed parameter model or a raw mapping into the wire-ready JSON
//! object sent as a request body or query string.

use super::{FieldKind, FieldSpec, Item, Model, ModelSchema};
use crate::utils::error::{ClientError, ClientResult};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Normalize a typed-or-raw parameter input against `T`'s schema
pub fn normalize_item<T>(item: &Item<T>) -> ClientResult<Map<String, Value>>
where
    T: Model + Serialize,
{
    let schema = T::schema();
    let value = match item {
        Item::Typed(params) => serde_json::to_value(params)?,
        Item::Raw(raw) => raw.clone(),
    };

    match value {
        Value::Object(map) => normalize(schema, &map),
        other => Err(ClientError::Validation(format!(
            "{} parameters must be an object, got {}",
            schema.name,
            json_type(&other)
        ))),
    }
}

/// Normalize a JSON object against a schema.
///
/// Required fields must be present and non-null. Optional fields that are
/// absent or null are left out of the output. Every emitted key is the
/// field's wire name; nested models and list elements are normalized
/// recursively.
pub fn normalize(schema: &ModelSchema, input: &Map<String, Value>) -> ClientResult<Map<String, Value>> {
    let mut output = Map::new();

    for field in schema.fields {
        match lookup(input, field) {
            Some(value) => {
                let value = normalize_field(schema, field, value)?;
                output.insert(field.wire.to_string(), value);
            }
            None if field.required => {
                return Err(ClientError::MissingField {
                    model: schema.name,
                    field: field.name,
                });
            }
            None => {}
        }
    }

    for key in input.keys() {
        if schema.field(key).is_none() {
            warn!("Dropping undeclared parameter `{}` on {}", key, schema.name);
        }
    }

    Ok(output)
}

/// Find a field's non-null value under its in-language name or wire name
fn lookup<'a>(input: &'a Map<String, Value>, field: &FieldSpec) -> Option<&'a Value> {
    input
        .get(field.name)
        .filter(|v| !v.is_null())
        .or_else(|| input.get(field.wire).filter(|v| !v.is_null()))
}

fn normalize_field(schema: &ModelSchema, field: &FieldSpec, value: &Value) -> ClientResult<Value> {
    if !field.list {
        return normalize_scalar(schema, field, value);
    }

    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| normalize_scalar(schema, field, item))
            .collect::<ClientResult<Vec<_>>>()
            .map(Value::Array),
        other => Err(mismatch(schema, field, other)),
    }
}

fn normalize_scalar(schema: &ModelSchema, field: &FieldSpec, value: &Value) -> ClientResult<Value> {
    if !field.kind.accepts(value) {
        return Err(mismatch(schema, field, value));
    }

    match (&field.kind, value) {
        (FieldKind::Model(nested), Value::Object(map)) => normalize(nested(), map).map(Value::Object),
        (FieldKind::Enum(known), Value::String(raw)) => {
            if !known.contains(&raw.as_str()) {
                debug!("Passing unrecognized enum value `{}` for {}.{}", raw, schema.name, field.name);
            }
            Ok(value.clone())
        }
        _ => Ok(value.clone()),
    }
}

fn mismatch(schema: &ModelSchema, field: &FieldSpec, value: &Value) -> ClientError {
    ClientError::Validation(format!(
        "{}.{}: expected {}, got {}",
        schema.name,
        field.name,
        field.expected(),
        json_type(value)
    ))
}

/// JSON type name of a value, for error messages
pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "number",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
