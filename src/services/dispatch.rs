//! Service dispatch primitives
//!
//! Static endpoint descriptions plus the path and query encoding shared by
//! every service method

use crate::utils::error::{ClientError, ClientResult};
use serde_json::{Map, Value};
use std::fmt;

/// HTTP verbs used by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Upper-case verb
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Whether parameters travel in a JSON body rather than the query string
    pub fn carries_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }

    /// Whether repeating the request cannot change the outcome
    pub fn is_idempotent(&self) -> bool {
        !matches!(self, HttpMethod::Post | HttpMethod::Patch)
    }

    /// Convert to the reqwest method
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of one endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// Stable identifier used in logs, e.g. `agents.create`
    pub id: &'static str,
    /// HTTP verb
    pub method: HttpMethod,
    /// Path template relative to the base URL, e.g. `agent/v1/run/{id}/status`
    pub path: &'static str,
}

impl Operation {
    pub const fn get(id: &'static str, path: &'static str) -> Self {
        Self { id, method: HttpMethod::Get, path }
    }

    pub const fn post(id: &'static str, path: &'static str) -> Self {
        Self { id, method: HttpMethod::Post, path }
    }

    pub const fn patch(id: &'static str, path: &'static str) -> Self {
        Self { id, method: HttpMethod::Patch, path }
    }

    pub const fn delete(id: &'static str, path: &'static str) -> Self {
        Self { id, method: HttpMethod::Delete, path }
    }

    /// Number of `{...}` placeholders in the path template
    pub fn placeholder_count(&self) -> usize {
        self.path.matches('{').count()
    }
}

/// Substitute positional parameters into a path template.
///
/// Placeholders are filled in order of appearance; each value is
/// percent-encoded as a single path segment.
pub fn expand_path(template: &str, params: &[&str]) -> ClientResult<String> {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;
    let mut values = params.iter();
    let mut used = 0;

    while let Some(start) = rest.find('{') {
        let end = rest[start..]
            .find('}')
            .map(|offset| start + offset)
            .ok_or_else(|| ClientError::Validation(format!("Unterminated placeholder in path `{}`", template)))?;

        let value = values.next().ok_or_else(|| {
            ClientError::Validation(format!(
                "Path `{}` expects more than {} parameter(s)",
                template, used
            ))
        })?;
        if value.is_empty() {
            return Err(ClientError::Validation(format!(
                "Path parameter `{}` of `{}` cannot be empty",
                &rest[start + 1..end],
                template
            )));
        }

        out.push_str(&rest[..start]);
        out.push_str(&urlencoding::encode(value));
        used += 1;
        rest = &rest[end + 1..];
    }
    out.push_str(rest);

    if values.next().is_some() {
        return Err(ClientError::Validation(format!(
            "Path `{}` takes {} parameter(s), got {}",
            template,
            used,
            params.len()
        )));
    }

    Ok(out)
}

/// Flatten normalized parameters into query string pairs.
///
/// Scalars become their string form, lists become repeated keys and
/// nested objects are sent as JSON text.
pub fn to_query_pairs(params: &Map<String, Value>) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(params.len());
    for (key, value) in params {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                for item in items {
                    if let Some(text) = query_scalar(item) {
                        pairs.push((key.clone(), text));
                    }
                }
            }
            other => {
                if let Some(text) = query_scalar(other) {
                    pairs.push((key.clone(), text));
                }
            }
        }
    }
    pairs
}

fn query_scalar(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}
