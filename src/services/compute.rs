//! Compute environment service

use super::client::{payload, Client};
use super::dispatch::Operation;
use super::transport::RequestOptions;
use crate::models::compute::*;
use crate::models::DeleteResponse;
use crate::schema::Item;
use crate::utils::error::ClientResult;

const CREATE_ENVIRONMENT: Operation = Operation::post("compute.create_environment", "compute/v1/environments");
const LIST_ENVIRONMENTS: Operation = Operation::get("compute.list_environments", "compute/v1/environments");
const RETRIEVE_ENVIRONMENT: Operation = Operation::get("compute.retrieve_environment", "compute/v1/environments/{name}");
const DELETE_ENVIRONMENT: Operation = Operation::delete("compute.delete_environment", "compute/v1/environments/{name}");
const SET_DEFAULT: Operation = Operation::post("compute.set_default_environment", "compute/v1/environments/{name}/default");
const SET_VARIABLE: Operation = Operation::post("compute.set_variable", "compute/v1/environments/{name}/variables");

/// `compute/v1`
#[derive(Debug, Clone, Copy)]
pub struct Compute<'a> {
    client: &'a Client,
}

impl<'a> Compute<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Create an environment
    pub async fn create_environment(
        &self,
        params: impl Into<Item<EnvironmentCreateParams>>,
        options: Option<RequestOptions>,
    ) -> ClientResult<ComputeEnvironment> {
        let body = payload::<EnvironmentCreateParams>(params.into())?;
        self.client.request(&CREATE_ENVIRONMENT, &[], Some(body), options).await
    }

    /// List environments
    pub async fn list_environments(&self, options: Option<RequestOptions>) -> ClientResult<EnvironmentListResponse> {
        self.client.request(&LIST_ENVIRONMENTS, &[], None, options).await
    }

    /// Fetch an environment by name
    pub async fn retrieve_environment(&self, name: &str, options: Option<RequestOptions>) -> ClientResult<ComputeEnvironment> {
        self.client.request(&RETRIEVE_ENVIRONMENT, &[name], None, options).await
    }

    /// Delete an environment
    pub async fn delete_environment(&self, name: &str, options: Option<RequestOptions>) -> ClientResult<DeleteResponse> {
        self.client.request(&DELETE_ENVIRONMENT, &[name], None, options).await
    }

    /// Make an environment the organization default
    pub async fn set_default_environment(&self, name: &str, options: Option<RequestOptions>) -> ClientResult<ComputeEnvironment> {
        self.client.request(&SET_DEFAULT, &[name], None, options).await
    }

    /// Create or replace an environment variable
    pub async fn set_variable(
        &self,
        name: &str,
        params: impl Into<Item<VariableSetParams>>,
        options: Option<RequestOptions>,
    ) -> ClientResult<EnvironmentVariable> {
        let body = payload::<VariableSetParams>(params.into())?;
        self.client.request(&SET_VARIABLE, &[name], Some(body), options).await
    }
}
