//! Workflow service

use super::client::{payload, Client};
use super::dispatch::Operation;
use super::transport::RequestOptions;
use crate::models::workflows::*;
use crate::schema::Item;
use crate::utils::error::ClientResult;
use serde_json::Value;

const LIST: Operation = Operation::get("workflows.list", "workflows/v1");
const RETRIEVE: Operation = Operation::get("workflows.retrieve", "workflows/v1/{id}");
const EXECUTE: Operation = Operation::post("workflows.execute", "workflows/v1/{id}/execute");
const RETRIEVE_EXECUTION: Operation = Operation::get("workflows.retrieve_execution", "workflows/v1/executions/{id}");
const EXECUTION_OUTPUT: Operation = Operation::get("workflows.execution_output", "workflows/v1/executions/{id}/output");

/// `workflows/v1`
#[derive(Debug, Clone, Copy)]
pub struct Workflows<'a> {
    client: &'a Client,
}

impl<'a> Workflows<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List workflows
    pub async fn list(
        &self,
        params: impl Into<Item<WorkflowListParams>>,
        options: Option<RequestOptions>,
    ) -> ClientResult<WorkflowListResponse> {
        let query = payload::<WorkflowListParams>(params.into())?;
        self.client.request(&LIST, &[], Some(query), options).await
    }

    /// Fetch a workflow definition
    pub async fn retrieve(&self, id: &str, options: Option<RequestOptions>) -> ClientResult<Workflow> {
        self.client.request(&RETRIEVE, &[id], None, options).await
    }

    /// Start an execution
    pub async fn execute(
        &self,
        id: &str,
        params: impl Into<Item<WorkflowExecuteParams>>,
        options: Option<RequestOptions>,
    ) -> ClientResult<WorkflowExecution> {
        let body = payload::<WorkflowExecuteParams>(params.into())?;
        self.client.request(&EXECUTE, &[id], Some(body), options).await
    }

    /// Fetch an execution
    pub async fn retrieve_execution(&self, id: &str, options: Option<RequestOptions>) -> ClientResult<WorkflowExecution> {
        self.client.request(&RETRIEVE_EXECUTION, &[id], None, options).await
    }

    /// Fetch the output of an execution; its shape depends on the workflow
    pub async fn execution_output(&self, id: &str, options: Option<RequestOptions>) -> ClientResult<Value> {
        self.client.request_value(&EXECUTION_OUTPUT, &[id], None, options).await
    }
}
