//! Managed database service

use super::client::{payload, Client};
use super::dispatch::Operation;
use super::transport::RequestOptions;
use crate::models::database::*;
use crate::models::DeleteResponse;
use crate::schema::Item;
use crate::utils::error::ClientResult;

const CREATE_PROJECT: Operation = Operation::post("database.create_project", "database/v1/projects");
const LIST_PROJECTS: Operation = Operation::get("database.list_projects", "database/v1/projects");
const RETRIEVE_PROJECT: Operation = Operation::get("database.retrieve_project", "database/v1/projects/{id}");
const DELETE_PROJECT: Operation = Operation::delete("database.delete_project", "database/v1/projects/{id}");
const CONNECTION: Operation = Operation::get("database.connection", "database/v1/projects/{id}/connection");

/// `database/v1`
#[derive(Debug, Clone, Copy)]
pub struct Database<'a> {
    client: &'a Client,
}

impl<'a> Database<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Provision a project
    pub async fn create_project(
        &self,
        params: impl Into<Item<ProjectCreateParams>>,
        options: Option<RequestOptions>,
    ) -> ClientResult<DatabaseProject> {
        let body = payload::<ProjectCreateParams>(params.into())?;
        self.client.request(&CREATE_PROJECT, &[], Some(body), options).await
    }

    /// List projects
    pub async fn list_projects(&self, options: Option<RequestOptions>) -> ClientResult<ProjectListResponse> {
        self.client.request(&LIST_PROJECTS, &[], None, options).await
    }

    /// Fetch a project
    pub async fn retrieve_project(&self, id: &str, options: Option<RequestOptions>) -> ClientResult<DatabaseProject> {
        self.client.request(&RETRIEVE_PROJECT, &[id], None, options).await
    }

    /// Delete a project and its data
    pub async fn delete_project(&self, id: &str, options: Option<RequestOptions>) -> ClientResult<DeleteResponse> {
        self.client.request(&DELETE_PROJECT, &[id], None, options).await
    }

    /// Fetch connection details
    pub async fn connection(&self, id: &str, options: Option<RequestOptions>) -> ClientResult<ConnectionInfo> {
        self.client.request(&CONNECTION, &[id], None, options).await
    }
}
