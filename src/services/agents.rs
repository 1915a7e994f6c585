//! Agent and agent-run services

use super::client::{payload, Client};
use super::dispatch::Operation;
use super::transport::RequestOptions;
use crate::models::agents::*;
use crate::models::DeleteResponse;
use crate::schema::Item;
use crate::utils::error::ClientResult;

const CREATE: Operation = Operation::post("agents.create", "agent/v1/agents");
const LIST: Operation = Operation::get("agents.list", "agent/v1/agents");
const RETRIEVE: Operation = Operation::get("agents.retrieve", "agent/v1/agents/{id}");
const UPDATE: Operation = Operation::patch("agents.update", "agent/v1/agents/{id}");
const DELETE: Operation = Operation::delete("agents.delete", "agent/v1/agents/{id}");

const RUN_CREATE: Operation = Operation::post("runs.create", "agent/v1/run");
const RUN_LIST: Operation = Operation::get("runs.list", "agent/v1/run");
const RUN_EXEC: Operation = Operation::post("runs.exec", "agent/v1/run/{id}/exec");
const RUN_STATUS: Operation = Operation::get("runs.get_status", "agent/v1/run/{id}/status");
const RUN_DETAILS: Operation = Operation::get("runs.get_details", "agent/v1/run/{id}/details");
const RUN_WATCH: Operation = Operation::post("runs.watch", "agent/v1/run/{id}/watch");
const RUN_CANCEL: Operation = Operation::post("runs.cancel", "agent/v1/run/{id}/cancel");

/// `agent/v1/agents`
#[derive(Debug, Clone, Copy)]
pub struct Agents<'a> {
    client: &'a Client,
}

impl<'a> Agents<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Create an agent
    pub async fn create(
        &self,
        params: impl Into<Item<AgentCreateParams>>,
        options: Option<RequestOptions>,
    ) -> ClientResult<Agent> {
        let body = payload::<AgentCreateParams>(params.into())?;
        self.client.request(&CREATE, &[], Some(body), options).await
    }

    /// List agents
    pub async fn list(
        &self,
        params: impl Into<Item<AgentListParams>>,
        options: Option<RequestOptions>,
    ) -> ClientResult<AgentListResponse> {
        let query = payload::<AgentListParams>(params.into())?;
        self.client.request(&LIST, &[], Some(query), options).await
    }

    /// Fetch one agent
    pub async fn retrieve(&self, id: &str, options: Option<RequestOptions>) -> ClientResult<Agent> {
        self.client.request(&RETRIEVE, &[id], None, options).await
    }

    /// Update fields of an agent; unset fields are left unchanged
    pub async fn update(
        &self,
        id: &str,
        params: impl Into<Item<AgentUpdateParams>>,
        options: Option<RequestOptions>,
    ) -> ClientResult<Agent> {
        let body = payload::<AgentUpdateParams>(params.into())?;
        self.client.request(&UPDATE, &[id], Some(body), options).await
    }

    /// Delete an agent
    pub async fn delete(&self, id: &str, options: Option<RequestOptions>) -> ClientResult<DeleteResponse> {
        self.client.request(&DELETE, &[id], None, options).await
    }
}

/// `agent/v1/run`
#[derive(Debug, Clone, Copy)]
pub struct Runs<'a> {
    client: &'a Client,
}

impl<'a> Runs<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Create a run without starting it
    pub async fn create(
        &self,
        params: impl Into<Item<RunCreateParams>>,
        options: Option<RequestOptions>,
    ) -> ClientResult<RunCreateResponse> {
        let body = payload::<RunCreateParams>(params.into())?;
        self.client.request(&RUN_CREATE, &[], Some(body), options).await
    }

    /// List runs
    pub async fn list(
        &self,
        params: impl Into<Item<RunListParams>>,
        options: Option<RequestOptions>,
    ) -> ClientResult<RunListResponse> {
        let query = payload::<RunListParams>(params.into())?;
        self.client.request(&RUN_LIST, &[], Some(query), options).await
    }

    /// Start a created run
    pub async fn exec(&self, id: &str, options: Option<RequestOptions>) -> ClientResult<RunExecResponse> {
        self.client.request(&RUN_EXEC, &[id], None, options).await
    }

    /// Poll the status of a run
    pub async fn get_status(&self, id: &str, options: Option<RequestOptions>) -> ClientResult<RunGetStatusResponse> {
        self.client.request(&RUN_STATUS, &[id], None, options).await
    }

    /// Fetch the full record of a run
    pub async fn get_details(&self, id: &str, options: Option<RequestOptions>) -> ClientResult<RunGetDetailsResponse> {
        self.client.request(&RUN_DETAILS, &[id], None, options).await
    }

    /// Register a completion callback
    pub async fn watch(
        &self,
        id: &str,
        params: impl Into<Item<RunWatchParams>>,
        options: Option<RequestOptions>,
    ) -> ClientResult<RunWatchResponse> {
        let body = payload::<RunWatchParams>(params.into())?;
        self.client.request(&RUN_WATCH, &[id], Some(body), options).await
    }

    /// Cancel a run
    pub async fn cancel(&self, id: &str, options: Option<RequestOptions>) -> ClientResult<RunCancelResponse> {
        self.client.request(&RUN_CANCEL, &[id], None, options).await
    }
}
