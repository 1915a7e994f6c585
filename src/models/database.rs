//! Managed database project models

use crate::schema::enums::string_enum;
use crate::schema::{model_schema, FieldKind, FieldSpec, Model};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

string_enum! {
    /// Provisioning state of a database project
    pub enum ProjectStatus {
        Provisioning => "provisioning",
        Active => "active",
        Suspended => "suspended",
        Deleting => "deleting",
    }
}

/// Parameters for `POST database/v1/projects`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCreateParams {
    /// Project name
    pub name: String,
    /// Hosting region (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Major Postgres version (optional)
    #[serde(rename = "pgVersion", skip_serializing_if = "Option::is_none")]
    pub pg_version: Option<u32>,
    /// Description (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ProjectCreateParams {
    /// Create parameters from the required name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            region: None,
            pg_version: None,
            description: None,
        }
    }

    /// Replace the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the region
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the Postgres version
    pub fn with_pg_version(mut self, pg_version: u32) -> Self {
        self.pg_version = Some(pg_version);
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

model_schema!(ProjectCreateParams, "ProjectCreateParams", [
    FieldSpec::required("name", FieldKind::String),
    FieldSpec::optional("region", FieldKind::String),
    FieldSpec::optional("pgVersion", FieldKind::Integer),
    FieldSpec::optional("description", FieldKind::String),
]);

/// A managed database project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseProject {
    pub id: String,
    pub name: String,
    pub status: ProjectStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(rename = "pgVersion", skip_serializing_if = "Option::is_none")]
    pub pg_version: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

model_schema!(DatabaseProject, "DatabaseProject", [
    FieldSpec::required("id", FieldKind::String),
    FieldSpec::required("name", FieldKind::String),
    FieldSpec::required("status", FieldKind::Enum(ProjectStatus::VALUES)),
    FieldSpec::optional("region", FieldKind::String),
    FieldSpec::optional("pgVersion", FieldKind::Integer),
    FieldSpec::optional("description", FieldKind::String),
    FieldSpec::optional("createdAt", FieldKind::DateTime),
]);

/// Response of `GET database/v1/projects`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectListResponse {
    pub projects: Vec<DatabaseProject>,
}

model_schema!(ProjectListResponse, "ProjectListResponse", [
    FieldSpec::required("projects", FieldKind::Model(DatabaseProject::schema)).list(),
]);

/// Connection details of a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionInfo {
    /// Full connection string, including credentials
    #[serde(rename = "connectionUri")]
    pub connection_uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Connection pooler endpoint (optional)
    #[serde(rename = "pooledConnectionUri", skip_serializing_if = "Option::is_none")]
    pub pooled_connection_uri: Option<String>,
}

model_schema!(ConnectionInfo, "ConnectionInfo", [
    FieldSpec::required("connectionURI", FieldKind::String).wire("connectionUri"),
    FieldSpec::optional("host", FieldKind::String),
    FieldSpec::optional("port", FieldKind::Integer),
    FieldSpec::optional("database", FieldKind::String),
    FieldSpec::optional("user", FieldKind::String),
    FieldSpec::optional("pooledConnectionURI", FieldKind::String).wire("pooledConnectionUri"),
]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::hydrate_value;
    use crate::utils::error::ClientError;
    use serde_json::json;

    #[test]
    fn test_connection_uri_remap() {
        let info: ConnectionInfo = hydrate_value(json!({
            "connectionUri": "postgres://u:p@db.example.com:5432/app",
            "port": 5432,
        })).unwrap();
        assert_eq!(info.port, Some(5432));
        assert!(info.connection_uri.starts_with("postgres://"));
    }

    #[test]
    fn test_project_without_status_is_schema_error() {
        let err = hydrate_value::<DatabaseProject>(json!({"id": "p1", "name": "main"})).unwrap_err();
        assert!(matches!(err, ClientError::Schema { .. }));
    }
}
