//! Typed-or-raw parameter input

use super::Model;
use serde::Serialize;
use serde_json::Value;

/// Either a typed model instance or an equivalent raw JSON mapping.
///
/// Service methods and list/nested parameter fields take `Item<T>`, so a
/// caller can mix pre-built models with plain `json!` objects. Raw mappings
/// may use in-language field names (`callbackURL`) or wire names
/// (`callbackUrl`); normalization resolves both.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Item<T> {
    /// A typed model
    Typed(T),
    /// A raw JSON value, expected to be an object
    Raw(Value),
}

impl<T> Item<T> {
    /// Wrap a raw JSON value
    pub fn raw(value: Value) -> Self {
        Item::Raw(value)
    }

    /// Borrow the typed value, if this is one
    pub fn as_typed(&self) -> Option<&T> {
        match self {
            Item::Typed(value) => Some(value),
            Item::Raw(_) => None,
        }
    }
}

impl<T: Model> From<T> for Item<T> {
    fn from(value: T) -> Self {
        Item::Typed(value)
    }
}
