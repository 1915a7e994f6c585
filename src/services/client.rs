//! API client facade
//!
//! Owns the shared transport and hands out one borrowed service per
//! resource group. Every service method funnels through [`Client::send`]:
//! normalized parameters in, exactly one transport call, raw response out.

use super::agents::{Agents, Runs};
use super::compute::Compute;
use super::database::Database;
use super::dispatch::{expand_path, to_query_pairs, Operation};
use super::payments::Payments;
use super::search::Search;
use super::transport::{ApiRequest, HttpTransport, RawResponse, RequestOptions, Transport};
use super::vault::VaultService;
use super::voice::VoiceService;
use super::workflows::Workflows;
use crate::config::Settings;
use crate::schema::{hydrate, normalize_item, Item, Model};
use crate::utils::error::ClientResult;
use crate::utils::logging::summarize_payload;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Normalized request parameters
pub(crate) type Payload = Map<String, Value>;

/// Case.dev API client.
///
/// Cheap to clone; clones share the underlying transport and may be used
/// from many tasks at once.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}

impl Client {
    /// Create a client over HTTP from explicit settings
    pub fn new(settings: &Settings) -> ClientResult<Self> {
        let transport = HttpTransport::new(settings)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Create a client from the profile file and environment
    pub fn from_env() -> ClientResult<Self> {
        let settings = Settings::load()?;
        Self::new(&settings)
    }

    /// Create a client over a custom transport
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Agent definitions
    pub fn agents(&self) -> Agents<'_> {
        Agents::new(self)
    }

    /// Agent runs
    pub fn runs(&self) -> Runs<'_> {
        Runs::new(self)
    }

    /// Compute environments
    pub fn compute(&self) -> Compute<'_> {
        Compute::new(self)
    }

    /// Managed databases
    pub fn database(&self) -> Database<'_> {
        Database::new(self)
    }

    /// Payment charges
    pub fn payments(&self) -> Payments<'_> {
        Payments::new(self)
    }

    /// Web search
    pub fn search(&self) -> Search<'_> {
        Search::new(self)
    }

    /// Vault storage
    pub fn vault(&self) -> VaultService<'_> {
        VaultService::new(self)
    }

    /// Transcription and speech
    pub fn voice(&self) -> VoiceService<'_> {
        VoiceService::new(self)
    }

    /// Workflow catalog and executions
    pub fn workflows(&self) -> Workflows<'_> {
        Workflows::new(self)
    }

    /// Resolve an operation into a request and send it through the transport
    pub(crate) async fn send(
        &self,
        operation: &Operation,
        path_params: &[&str],
        payload: Option<Payload>,
        options: Option<RequestOptions>,
    ) -> ClientResult<RawResponse> {
        let path = expand_path(operation.path, path_params)?;

        let (query, body) = match payload {
            Some(params) if operation.method.carries_body() => (Vec::new(), Some(Value::Object(params))),
            Some(params) => (to_query_pairs(&params), None),
            None => (Vec::new(), None),
        };

        let summary = body.as_ref().map(summarize_payload).unwrap_or(Value::Null);
        debug!(
            "Dispatching {} {} {} query={:?} body={}",
            operation.id, operation.method, path, query, summary
        );

        self.transport
            .request(ApiRequest {
                method: operation.method,
                path,
                query,
                body,
                options: options.unwrap_or_default(),
            })
            .await
    }

    /// Send and hydrate a typed response
    pub(crate) async fn request<R>(
        &self,
        operation: &Operation,
        path_params: &[&str],
        payload: Option<Payload>,
        options: Option<RequestOptions>,
    ) -> ClientResult<R>
    where
        R: Model + DeserializeOwned,
    {
        let response = self.send(operation, path_params, payload, options).await?;
        hydrate(&response.body)
    }

    /// Send and return the decoded JSON untouched
    pub(crate) async fn request_value(
        &self,
        operation: &Operation,
        path_params: &[&str],
        payload: Option<Payload>,
        options: Option<RequestOptions>,
    ) -> ClientResult<Value> {
        let response = self.send(operation, path_params, payload, options).await?;
        if response.body.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Send and return the raw body bytes
    pub(crate) async fn request_bytes(
        &self,
        operation: &Operation,
        path_params: &[&str],
        payload: Option<Payload>,
        options: Option<RequestOptions>,
    ) -> ClientResult<Vec<u8>> {
        let mut options = options.unwrap_or_default();
        if options.accept.is_none() {
            options.accept = Some("*/*".to_string());
        }
        let response = self.send(operation, path_params, payload, Some(options)).await?;
        Ok(response.body)
    }
}

/// Normalize a typed-or-raw parameter input into a payload
pub(crate) fn payload<P>(params: Item<P>) -> ClientResult<Payload>
where
    P: Model + Serialize,
{
    normalize_item(&params)
}
