//! Data models module
//!
//! Request parameter and response models for every API domain. Each model
//! pairs serde attributes (wire names, skipped `None`s) with a static
//! schema table consumed by normalization and hydration.

use crate::schema::{model_schema, FieldKind, FieldSpec};
use serde::{Deserialize, Serialize};

pub mod agents;
pub mod compute;
pub mod database;
pub mod payments;
pub mod search;
pub mod vault;
pub mod voice;
pub mod workflows;

/// Generic deletion acknowledgement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Whether the resource was deleted
    pub success: bool,
    /// Identifier of the deleted resource (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

model_schema!(DeleteResponse, "DeleteResponse", [
    FieldSpec::required("success", FieldKind::Boolean),
    FieldSpec::optional("id", FieldKind::String),
]);

/// Offset pagination parameters shared by simple list endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageParams {
    /// Maximum number of items to return (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Number of items to skip (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl PageParams {
    /// Create empty pagination parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the page offset
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }
}

model_schema!(PageParams, "PageParams", [
    FieldSpec::optional("limit", FieldKind::Integer),
    FieldSpec::optional("offset", FieldKind::Integer),
]);
