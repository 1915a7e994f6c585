//! Response hydration
//!
//! Validates a decoded payload against a model's schema, re-keys values
//! found under in-language names onto their wire names, then materializes
//! the typed model with serde.

use super::{FieldKind, FieldSpec, Model, ModelSchema};
use super::normalize::json_type;
use crate::utils::error::{ClientError, ClientResult, ErrorContext};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Hydrate a typed response model from raw response bytes
pub fn hydrate<R>(body: &[u8]) -> ClientResult<R>
where
    R: Model + DeserializeOwned,
{
    let schema = R::schema();
    let raw: Value = serde_json::from_slice(body).map_err(|e| {
        ClientError::schema(schema.name, "<root>", format!("response is not valid JSON: {}", e))
    })?;
    hydrate_value(raw)
}

/// Hydrate a typed response model from an already-decoded JSON value
pub fn hydrate_value<R>(raw: Value) -> ClientResult<R>
where
    R: Model + DeserializeOwned,
{
    let schema = R::schema();
    let canonical = canonicalize(schema, &raw, schema.name)?;
    serde_json::from_value(canonical).schema_context(schema.name)
}

/// Check `raw` against `schema` and return a copy keyed by wire names.
///
/// Null optional values are removed so they deserialize as `None`.
/// Undeclared keys are kept; serde ignores them.
fn canonicalize(schema: &ModelSchema, raw: &Value, path: &str) -> ClientResult<Value> {
    let map = match raw {
        Value::Object(map) => map,
        other => {
            return Err(ClientError::schema(
                schema.name,
                path,
                format!("expected object, got {}", json_type(other)),
            ));
        }
    };

    let mut out = map.clone();
    for field in schema.fields {
        let found = map
            .get(field.wire)
            .filter(|v| !v.is_null())
            .or_else(|| map.get(field.name).filter(|v| !v.is_null()));

        out.remove(field.name);
        out.remove(field.wire);

        match found {
            Some(value) => {
                let field_path = format!("{}.{}", path, field.name);
                let value = canonical_field(schema, field, value, &field_path)?;
                out.insert(field.wire.to_string(), value);
            }
            None if field.required => {
                return Err(ClientError::schema(
                    schema.name,
                    format!("{}.{}", path, field.name),
                    "missing required field",
                ));
            }
            None => {}
        }
    }

    Ok(Value::Object(out))
}

fn canonical_field(schema: &ModelSchema, field: &FieldSpec, value: &Value, path: &str) -> ClientResult<Value> {
    if !field.list {
        return canonical_scalar(schema, field, value, path);
    }

    match value {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| canonical_scalar(schema, field, item, &format!("{}[{}]", path, i)))
            .collect::<ClientResult<Vec<_>>>()
            .map(Value::Array),
        other => Err(ClientError::schema(
            schema.name,
            path,
            format!("expected {}, got {}", field.expected(), json_type(other)),
        )),
    }
}

fn canonical_scalar(schema: &ModelSchema, field: &FieldSpec, value: &Value, path: &str) -> ClientResult<Value> {
    if !field.kind.accepts(value) {
        return Err(ClientError::schema(
            schema.name,
            path,
            format!("expected {}, got {}", field.kind.describe(), json_type(value)),
        ));
    }

    match (&field.kind, value) {
        (FieldKind::Model(nested), _) => canonicalize(nested(), value, path),
        _ => Ok(value.clone()),
    }
}
