//! Compute environment models

use crate::schema::enums::string_enum;
use crate::schema::{model_schema, FieldKind, FieldSpec, Item};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

string_enum! {
    /// Deployment target a variable applies to
    pub enum TargetEnvironment {
        Production => "production",
        Preview => "preview",
        Development => "development",
    }
}

/// One deployment target entry of a variable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentTarget {
    /// Target environment
    pub value: TargetEnvironment,
}

impl DeploymentTarget {
    /// Production deployments
    pub const PRODUCTION: DeploymentTarget = DeploymentTarget { value: TargetEnvironment::Production };
    /// Preview deployments
    pub const PREVIEW: DeploymentTarget = DeploymentTarget { value: TargetEnvironment::Preview };
    /// Local development
    pub const DEVELOPMENT: DeploymentTarget = DeploymentTarget { value: TargetEnvironment::Development };

    /// Create a target from a typed or raw value
    pub fn new(value: impl Into<TargetEnvironment>) -> Self {
        Self { value: value.into() }
    }
}

model_schema!(DeploymentTarget, "DeploymentTarget", [
    FieldSpec::required("value", FieldKind::Enum(TargetEnvironment::VALUES)),
]);

/// Parameters for `POST compute/v1/environments`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvironmentCreateParams {
    /// Environment name, unique per organization
    pub name: String,
    /// Description (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl EnvironmentCreateParams {
    /// Create parameters from the required name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), description: None }
    }

    /// Replace the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

model_schema!(EnvironmentCreateParams, "EnvironmentCreateParams", [
    FieldSpec::required("name", FieldKind::String),
    FieldSpec::optional("description", FieldKind::String),
]);

/// A compute environment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputeEnvironment {
    /// Environment ID
    pub id: String,
    /// Environment name
    pub name: String,
    /// Description (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Default environment of the organization (optional)
    #[serde(rename = "isDefault", skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    /// Public domain serving this environment (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Creation time (optional)
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time (optional)
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

model_schema!(ComputeEnvironment, "ComputeEnvironment", [
    FieldSpec::required("id", FieldKind::String),
    FieldSpec::required("name", FieldKind::String),
    FieldSpec::optional("description", FieldKind::String),
    FieldSpec::optional("isDefault", FieldKind::Boolean),
    FieldSpec::optional("domain", FieldKind::String),
    FieldSpec::optional("createdAt", FieldKind::DateTime),
    FieldSpec::optional("updatedAt", FieldKind::DateTime),
]);

/// Response of `GET compute/v1/environments`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentListResponse {
    /// Environments of the organization
    pub environments: Vec<ComputeEnvironment>,
}

model_schema!(EnvironmentListResponse, "EnvironmentListResponse", [
    FieldSpec::required("environments", FieldKind::Model(ComputeEnvironment::schema)).list(),
]);

/// Parameters for `POST compute/v1/environments/{name}/variables`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableSetParams {
    /// Variable name
    pub key: String,
    /// Variable value
    pub value: String,
    /// Targets the variable applies to; typed or raw entries may be mixed (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Vec<Item<DeploymentTarget>>>,
    /// Store the value encrypted and hide it from listings (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<bool>,
}

impl VariableSetParams {
    /// Create parameters from the required key and value
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            target: None,
            sensitive: None,
        }
    }

    /// Replace the key
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Replace the value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the target list
    pub fn with_target<I, T>(mut self, target: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Item<DeploymentTarget>>,
    {
        self.target = Some(target.into_iter().map(Into::into).collect());
        self
    }

    /// Mark the variable as sensitive
    pub fn with_sensitive(mut self, sensitive: bool) -> Self {
        self.sensitive = Some(sensitive);
        self
    }
}

model_schema!(VariableSetParams, "VariableSetParams", [
    FieldSpec::required("key", FieldKind::String),
    FieldSpec::required("value", FieldKind::String),
    FieldSpec::optional("target", FieldKind::Model(DeploymentTarget::schema)).list(),
    FieldSpec::optional("sensitive", FieldKind::Boolean),
]);

/// A stored environment variable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentVariable {
    /// Variable name
    pub key: String,
    /// Value, omitted for sensitive variables (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Targets the variable applies to (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Vec<DeploymentTarget>>,
    /// Whether the value is hidden from listings (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<bool>,
    /// Last update time (optional)
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

model_schema!(EnvironmentVariable, "EnvironmentVariable", [
    FieldSpec::required("key", FieldKind::String),
    FieldSpec::optional("value", FieldKind::String),
    FieldSpec::optional("target", FieldKind::Model(DeploymentTarget::schema)).list(),
    FieldSpec::optional("sensitive", FieldKind::Boolean),
    FieldSpec::optional("updatedAt", FieldKind::DateTime),
]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{hydrate_value, normalize_item};
    use serde_json::{json, Value};

    #[test]
    fn test_mixed_target_list_normalizes() {
        let params = VariableSetParams::new("API_URL", "https://example.com").with_target([
            Item::from(DeploymentTarget::PRODUCTION),
            Item::raw(json!({"value": "preview"})),
        ]);
        let wire = normalize_item(&Item::from(params)).unwrap();
        assert_eq!(
            Value::Object(wire),
            json!({
                "key": "API_URL",
                "value": "https://example.com",
                "target": [{"value": "production"}, {"value": "preview"}],
            })
        );
    }

    #[test]
    fn test_target_entry_missing_value_fails() {
        let params = VariableSetParams::new("K", "V").with_target([Item::raw(json!({}))]);
        assert!(normalize_item(&Item::from(params)).is_err());
    }

    #[test]
    fn test_variable_hydrates_targets() {
        let var: EnvironmentVariable = hydrate_value(json!({
            "key": "K",
            "target": [{"value": "development"}, {"value": "qa"}],
        })).unwrap();
        let target = var.target.unwrap();
        assert_eq!(target[0], DeploymentTarget::DEVELOPMENT);
        assert_eq!(target[1].value, "qa");
        assert!(var.value.is_none());
    }
}
