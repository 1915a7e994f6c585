//! Error handling module
//!
//! Defines the error taxonomy surfaced by every client call

use thiserror::Error;

/// Client error types
#[derive(Error, Debug)]
pub enum ClientError {
    /// A required parameter field was never set
    #[error("Missing required field `{field}` on {model}")]
    MissingField {
        /// Model the field belongs to
        model: &'static str,
        /// In-language field name
        field: &'static str,
    },

    /// Request validation failed before dispatch
    #[error("Request validation failed: {0}")]
    Validation(String),

    /// The remote API answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message extracted from the body, or the status reason
        message: String,
        /// Raw response body
        body: String,
    },

    /// The response does not match the declared schema
    #[error("Response schema mismatch at {model}.{field}: {reason}")]
    Schema {
        /// Model being hydrated
        model: String,
        /// Field path inside the model
        field: String,
        /// What went wrong
        reason: String,
    },

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    /// Request timeout
    #[error("Request timeout")]
    Timeout,
}

/// Body shapes the API uses for error payloads
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
enum ErrorBody {
    Nested { error: ErrorDetail },
    Flat { error: String },
    Message { message: String },
}

#[derive(Debug, serde::Deserialize)]
struct ErrorDetail {
    message: String,
}

impl ClientError {
    /// Build an API error from a status and raw body
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let message = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(ErrorBody::Nested { error }) => error.message,
            Ok(ErrorBody::Flat { error }) => error,
            Ok(ErrorBody::Message { message }) => message,
            Err(_) if body.trim().is_empty() => format!("HTTP {}", status),
            Err(_) => body.clone(),
        };

        ClientError::Api { status, message, body }
    }

    /// Build a schema error
    pub fn schema(model: impl Into<String>, field: impl Into<String>, reason: impl Into<String>) -> Self {
        ClientError::Schema {
            model: model.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// HTTP status code, when the remote API produced one
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::HttpClient(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Get error type string
    pub fn error_type(&self) -> &'static str {
        match self {
            ClientError::MissingField { .. } | ClientError::Validation(_) => "validation_error",
            ClientError::Api { status: 401, .. } => "authentication_error",
            ClientError::Api { status: 403, .. } => "permission_error",
            ClientError::Api { status: 404, .. } => "not_found_error",
            ClientError::Api { status: 429, .. } => "rate_limit_error",
            ClientError::Api { .. } => "api_error",
            ClientError::Schema { .. } | ClientError::Serialization(_) => "schema_error",
            ClientError::HttpClient(_) | ClientError::Timeout => "transport_error",
            ClientError::Config(_) => "config_error",
        }
    }

    /// Whether the failure was raised locally, before any request was sent
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            ClientError::MissingField { .. } | ClientError::Validation(_) | ClientError::Config(_)
        )
    }

    /// Whether a transport may retry the request that produced this error
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::Timeout => true,
            ClientError::Api { status, .. } => matches!(status, 408 | 429 | 500..=599),
            ClientError::HttpClient(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            _ => false,
        }
    }
}

/// Result type alias
pub type ClientResult<T> = Result<T, ClientError>;

/// Error handling helper functions
pub mod helpers {
    use super::*;

    /// Create validation error
    pub fn validation_error(message: impl Into<String>) -> ClientError {
        ClientError::Validation(message.into())
    }

    /// Create schema error for a whole model
    pub fn schema_error(model: impl Into<String>, reason: impl Into<String>) -> ClientError {
        ClientError::schema(model, "<root>", reason)
    }

    /// Create configuration error
    pub fn config_error(message: impl Into<String>) -> ClientError {
        ClientError::Config(anyhow::anyhow!(message.into()))
    }
}

/// Error context extension trait
pub trait ErrorContext<T> {
    /// Add validation error context
    fn validation_context(self, message: &str) -> ClientResult<T>;

    /// Add schema error context for the given model
    fn schema_context(self, model: &str) -> ClientResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn validation_context(self, message: &str) -> ClientResult<T> {
        self.map_err(|e| ClientError::Validation(format!("{}: {}", message, e)))
    }

    fn schema_context(self, model: &str) -> ClientResult<T> {
        self.map_err(|e| ClientError::schema(model, "<root>", e.to_string()))
    }
}
