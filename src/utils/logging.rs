//! Logging utilities
//!
//! Subscriber setup and helpers that keep request payloads and secrets
//! readable in debug logs

use crate::config::LoggingConfig;
use anyhow::Result;
use serde_json::{Map, Value};

/// Set to true to log request payloads without truncation
pub const VERBOSE_REQUEST_LOGGING: bool = false;

const MAX_STRING_LEN: usize = 200;
const MAX_LIST_PREVIEW: usize = 3;

/// Install a global `tracing` subscriber.
///
/// Returns an error instead of panicking when a subscriber is already set,
/// so applications that configure their own logging can still call this.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)?;

    let result = if config.format == "json" {
        // JSON format logs (production environment)
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_current_span(false)
            .with_span_list(false)
            .try_init()
    } else {
        // Human readable format (development environment)
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .try_init()
    };

    result.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}

/// Truncate a string with a note about original length
pub fn truncate_content(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len).collect();
        format!("{}... ({} chars truncated)", kept, s.chars().count() - max_len)
    } else {
        s.to_string()
    }
}

/// Create a log-friendly copy of a request payload.
///
/// Keeps the original structure but truncates long strings and collapses
/// long lists.
pub fn summarize_payload(value: &Value) -> Value {
    if VERBOSE_REQUEST_LOGGING {
        return value.clone();
    }

    match value {
        Value::String(s) => Value::String(truncate_content(s, MAX_STRING_LEN)),
        Value::Array(items) => {
            let mut preview: Vec<Value> = items
                .iter()
                .take(MAX_LIST_PREVIEW)
                .map(summarize_payload)
                .collect();
            if items.len() > MAX_LIST_PREVIEW {
                preview.push(Value::String(format!("...and {} more items", items.len() - MAX_LIST_PREVIEW)));
            }
            Value::Array(preview)
        }
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), summarize_payload(v)))
                .collect::<Map<String, Value>>(),
        ),
        other => other.clone(),
    }
}

/// Mask a secret for logging, keeping a short prefix for identification
pub fn redact_secret(secret: &str) -> String {
    if secret.chars().count() <= 8 {
        return "****".to_string();
    }
    let prefix: String = secret.chars().take(4).collect();
    format!("{}****", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truncate_content() {
        assert_eq!(truncate_content("short", 10), "short");
        assert_eq!(truncate_content("abcdef", 3), "abc... (3 chars truncated)");
        // multi-byte characters are not split
        assert_eq!(truncate_content("ééé", 1), "é... (2 chars truncated)");
    }

    #[test]
    fn test_summarize_payload() {
        let long = "x".repeat(500);
        let payload = json!({
            "prompt": long,
            "vaultIds": ["a", "b", "c", "d", "e"],
            "limit": 10,
        });
        let summary = summarize_payload(&payload);
        assert!(summary["prompt"].as_str().unwrap().contains("300 chars truncated"));
        assert_eq!(summary["vaultIds"].as_array().unwrap().len(), 4);
        assert_eq!(summary["vaultIds"][3], json!("...and 2 more items"));
        assert_eq!(summary["limit"], json!(10));
    }

    #[test]
    fn test_redact_secret() {
        assert_eq!(redact_secret("sk_case_1234567890"), "sk_c****");
        assert_eq!(redact_secret("short"), "****");
    }

    #[test]
    fn test_invalid_filter_rejected() {
        let config = LoggingConfig {
            level: "casedev=loudest".to_string(),
            format: "text".to_string(),
        };
        assert!(init_logging(&config).is_err());
    }
}
