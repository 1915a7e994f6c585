//! Declarative model schemas
//!
//! Every parameter and response model carries one static table describing
//! its fields: in-language name, wire name, required flag and type tag.
//! [`normalize`] and [`hydrate`] are the only routines that read these
//! tables, so wire renames and optionality rules live in exactly one place
//! per model.

pub mod enums;
pub mod hydrate;
pub mod input;
pub mod normalize;

pub use hydrate::{hydrate, hydrate_value};
pub use input::Item;
pub use normalize::{normalize, normalize_item};

use serde_json::Value;

/// Declared type of a single field (or of each element of a list field)
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// JSON string
    String,
    /// JSON integer (signed or unsigned)
    Integer,
    /// Any JSON number
    Number,
    /// JSON boolean
    Boolean,
    /// RFC 3339 timestamp carried as a string
    DateTime,
    /// String restricted to a set of known values; unknown values are kept
    Enum(&'static [&'static str]),
    /// Nested model described by its own schema
    Model(fn() -> &'static ModelSchema),
    /// Free-form JSON, passed through untouched
    Mixed,
}

impl FieldKind {
    /// Short human-readable name used in error messages
    pub fn describe(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Integer => "integer",
            FieldKind::Number => "number",
            FieldKind::Boolean => "boolean",
            FieldKind::DateTime => "RFC 3339 date-time",
            FieldKind::Enum(_) => "enum string",
            FieldKind::Model(_) => "object",
            FieldKind::Mixed => "any",
        }
    }

    /// Check a non-null scalar against this kind.
    ///
    /// Nested models are only checked for being objects; their fields are
    /// validated by the caller against the nested schema.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            FieldKind::String | FieldKind::Enum(_) => value.is_string(),
            FieldKind::Integer => value.is_i64() || value.is_u64(),
            FieldKind::Number => value.is_number(),
            FieldKind::Boolean => value.is_boolean(),
            FieldKind::DateTime => value
                .as_str()
                .is_some_and(|s| chrono::DateTime::parse_from_rfc3339(s).is_ok()),
            FieldKind::Model(_) => value.is_object(),
            FieldKind::Mixed => true,
        }
    }
}

/// Metadata for one field of a model
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// In-language field name (e.g. `vaultIDs`)
    pub name: &'static str,
    /// JSON key used on the network (e.g. `vaultIds`)
    pub wire: &'static str,
    /// Whether the field must be present and non-null
    pub required: bool,
    /// Whether the field is a homogeneous list of `kind`
    pub list: bool,
    /// Declared type
    pub kind: FieldKind,
}

impl FieldSpec {
    /// A required field whose wire name equals its name
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self { name, wire: name, required: true, list: false, kind }
    }

    /// An optional field whose wire name equals its name
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self { name, wire: name, required: false, list: false, kind }
    }

    /// Override the wire name
    pub const fn wire(mut self, wire: &'static str) -> Self {
        self.wire = wire;
        self
    }

    /// Mark the field as a list of its kind
    pub const fn list(mut self) -> Self {
        self.list = true;
        self
    }

    /// Description of the declared type including list-ness
    pub fn expected(&self) -> String {
        if self.list {
            format!("list of {}", self.kind.describe())
        } else {
            self.kind.describe().to_string()
        }
    }
}

/// Static description of one model
#[derive(Debug)]
pub struct ModelSchema {
    /// Model name used in error messages
    pub name: &'static str,
    /// Ordered field table
    pub fields: &'static [FieldSpec],
}

impl ModelSchema {
    /// Find a field by in-language name or wire name
    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields
            .iter()
            .find(|f| f.name == key || f.wire == key)
    }

    /// Names of the required fields, in declaration order
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().filter(|f| f.required).map(|f| f.name)
    }
}

/// A type described by a [`ModelSchema`]
pub trait Model {
    /// The model's static field table
    fn schema() -> &'static ModelSchema;
}

/// Implement [`Model`] for a type from an inline field table.
macro_rules! model_schema {
    ($ty:ty, $name:literal, [$($field:expr),* $(,)?]) => {
        impl $crate::schema::Model for $ty {
            fn schema() -> &'static $crate::schema::ModelSchema {
                static SCHEMA: $crate::schema::ModelSchema = $crate::schema::ModelSchema {
                    name: $name,
                    fields: &[$($field),*],
                };
                &SCHEMA
            }
        }
    };
}

pub(crate) use model_schema;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Sample;

    model_schema!(Sample, "Sample", [
        FieldSpec::required("agentID", FieldKind::String).wire("agentId"),
        FieldSpec::optional("tags", FieldKind::String).list(),
    ]);

    #[test]
    fn test_field_lookup_by_either_name() {
        let schema = Sample::schema();
        assert_eq!(schema.field("agentID").map(|f| f.wire), Some("agentId"));
        assert_eq!(schema.field("agentId").map(|f| f.name), Some("agentID"));
        assert!(schema.field("missing").is_none());
        assert_eq!(schema.required_fields().collect::<Vec<_>>(), vec!["agentID"]);
    }

    #[test]
    fn test_kind_accepts() {
        assert!(FieldKind::Integer.accepts(&json!(120)));
        assert!(!FieldKind::Integer.accepts(&json!(1.5)));
        assert!(FieldKind::Number.accepts(&json!(1.5)));
        assert!(FieldKind::DateTime.accepts(&json!("2024-05-01T12:00:00Z")));
        assert!(!FieldKind::DateTime.accepts(&json!("yesterday")));
        assert!(FieldKind::Enum(&["queued"]).accepts(&json!("something-new")));
        assert!(FieldKind::Mixed.accepts(&json!([1, "two"])));
    }

    #[test]
    fn test_expected_description() {
        let field = FieldSpec::optional("tags", FieldKind::String).list();
        assert_eq!(field.expected(), "list of string");
    }
}
