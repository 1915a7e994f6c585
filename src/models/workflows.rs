//! Workflow catalog and execution models

use crate::schema::enums::string_enum;
use crate::schema::{model_schema, FieldKind, FieldSpec};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

string_enum! {
    /// Workflow execution state
    pub enum ExecutionStatus {
        Pending => "pending",
        Running => "running",
        Completed => "completed",
        Failed => "failed",
        Cancelled => "cancelled",
    }
}

/// Parameters for `GET workflows/v1`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkflowListParams {
    /// Only workflows in this category (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Only workflows in this sub-category (optional)
    #[serde(rename = "subCategory", skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    /// Only workflows of this type (optional)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub workflow_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl WorkflowListParams {
    /// Create an unfiltered listing
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter by sub-category
    pub fn with_sub_category(mut self, sub_category: impl Into<String>) -> Self {
        self.sub_category = Some(sub_category.into());
        self
    }

    /// Filter by workflow type
    pub fn with_workflow_type(mut self, workflow_type: impl Into<String>) -> Self {
        self.workflow_type = Some(workflow_type.into());
        self
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

model_schema!(WorkflowListParams, "WorkflowListParams", [
    FieldSpec::optional("category", FieldKind::String),
    FieldSpec::optional("subCategory", FieldKind::String),
    FieldSpec::optional("type", FieldKind::String),
    FieldSpec::optional("limit", FieldKind::Integer),
    FieldSpec::optional("offset", FieldKind::Integer),
]);

/// A workflow definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "subCategory", skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub workflow_type: Option<String>,
    /// JSON Schema of the expected input (optional)
    #[serde(rename = "inputSchema", skip_serializing_if = "Option::is_none")]
    pub input_schema: Option<Value>,
}

model_schema!(Workflow, "Workflow", [
    FieldSpec::required("id", FieldKind::String),
    FieldSpec::required("name", FieldKind::String),
    FieldSpec::optional("description", FieldKind::String),
    FieldSpec::optional("category", FieldKind::String),
    FieldSpec::optional("subCategory", FieldKind::String),
    FieldSpec::optional("type", FieldKind::String),
    FieldSpec::optional("inputSchema", FieldKind::Mixed),
]);

/// Response of `GET workflows/v1`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowListResponse {
    pub workflows: Vec<Workflow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

model_schema!(WorkflowListResponse, "WorkflowListResponse", [
    FieldSpec::required("workflows", FieldKind::Model(Workflow::schema)).list(),
    FieldSpec::optional("total", FieldKind::Integer),
]);

/// Parameters for `POST workflows/v1/{id}/execute`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkflowExecuteParams {
    /// Workflow input, shaped by the workflow's input schema
    pub input: Value,
    /// URL notified when the execution finishes (optional)
    #[serde(rename = "callbackUrl", skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    /// Model override (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl WorkflowExecuteParams {
    /// Create parameters from the required input
    pub fn new(input: Value) -> Self {
        Self { input, callback_url: None, model: None }
    }

    /// Replace the input
    pub fn with_input(mut self, input: Value) -> Self {
        self.input = input;
        self
    }

    /// Set the completion callback
    pub fn with_callback_url(mut self, callback_url: impl Into<String>) -> Self {
        self.callback_url = Some(callback_url.into());
        self
    }

    /// Set the model override
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

model_schema!(WorkflowExecuteParams, "WorkflowExecuteParams", [
    FieldSpec::required("input", FieldKind::Mixed),
    FieldSpec::optional("callbackURL", FieldKind::String).wire("callbackUrl"),
    FieldSpec::optional("model", FieldKind::String),
]);

/// A workflow execution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowExecution {
    pub id: String,
    #[serde(rename = "workflowId")]
    pub workflow_id: String,
    pub status: ExecutionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<Value>,
    /// Present once the execution completes (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(rename = "durationMs", skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "completedAt", skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

model_schema!(WorkflowExecution, "WorkflowExecution", [
    FieldSpec::required("id", FieldKind::String),
    FieldSpec::required("workflowID", FieldKind::String).wire("workflowId"),
    FieldSpec::required("status", FieldKind::Enum(ExecutionStatus::VALUES)),
    FieldSpec::optional("input", FieldKind::Mixed),
    FieldSpec::optional("output", FieldKind::Mixed),
    FieldSpec::optional("error", FieldKind::String),
    FieldSpec::optional("durationMs", FieldKind::Integer),
    FieldSpec::optional("createdAt", FieldKind::DateTime),
    FieldSpec::optional("completedAt", FieldKind::DateTime),
]);
