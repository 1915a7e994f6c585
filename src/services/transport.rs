//! HTTP transport
//!
//! The [`Transport`] seam between dispatch and the network, and
//! [`HttpTransport`], its reqwest implementation with bearer auth and
//! retry handling

use crate::config::{RetrySettings, Settings};
use crate::services::dispatch::HttpMethod;
use crate::utils::error::{ClientError, ClientResult};
use crate::utils::logging::redact_secret;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Per-call transport options, opaque to dispatch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// Override the client timeout for this call (optional)
    pub timeout: Option<Duration>,
    /// Extra headers for this call
    pub headers: Vec<(String, String)>,
    /// Sent as `Idempotency-Key` (optional)
    pub idempotency_key: Option<String>,
    /// `Accept` header override, `application/json` when unset (optional)
    pub accept: Option<String>,
}

impl RequestOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add a header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the idempotency key
    pub fn with_idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = Some(key.into());
        self
    }

    /// Set the accepted response media type
    pub fn with_accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }
}

/// A fully resolved request, ready for the wire
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP verb
    pub method: HttpMethod,
    /// Path relative to the base URL, already percent-encoded
    pub path: String,
    /// Query string pairs
    pub query: Vec<(String, String)>,
    /// JSON body (optional)
    pub body: Option<Value>,
    /// Per-call options
    pub options: RequestOptions,
}

/// A successful (2xx) response
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body bytes
    pub body: Vec<u8>,
}

/// Executes resolved requests.
///
/// Implementations return `Ok` only for 2xx responses; anything else is a
/// [`ClientError`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request
    async fn request(&self, request: ApiRequest) -> ClientResult<RawResponse>;
}

/// Retry configuration
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum retry attempts
    pub max_retries: u32,
    /// Base delay time (milliseconds)
    pub base_delay_ms: u64,
    /// Maximum delay time (milliseconds)
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        RetrySettings::default().into()
    }
}

impl From<RetrySettings> for RetryConfig {
    fn from(settings: RetrySettings) -> Self {
        Self {
            max_retries: settings.max_retries,
            base_delay_ms: settings.base_delay_ms,
            max_delay_ms: settings.max_delay_ms,
        }
    }
}

impl RetryConfig {
    /// No retries at all
    pub fn disabled() -> Self {
        Self { max_retries: 0, ..Self::default() }
    }

    /// Backoff before retry number `attempt + 1`
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 2_u64.saturating_pow(attempt);
        let delay = std::cmp::min(self.base_delay_ms.saturating_mul(factor), self.max_delay_ms);
        Duration::from_millis(delay)
    }
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    retry_config: RetryConfig,
}

impl HttpTransport {
    /// Create a transport from settings
    pub fn new(settings: &Settings) -> ClientResult<Self> {
        settings.validate_connection()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.api.timeout))
            .user_agent(format!("casedev-rust/{}", crate::VERSION))
            .build()?;

        debug!(
            "Created HTTP transport for {} with key {}",
            settings.api.base_url,
            redact_secret(&settings.api.api_key)
        );

        Ok(Self {
            client,
            base_url: settings.api.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api.api_key.clone(),
            retry_config: settings.retry.clone().into(),
        })
    }

    /// Replace the retry policy
    pub fn with_retry_config(mut self, retry_config: RetryConfig) -> Self {
        self.retry_config = retry_config;
        self
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join the base URL and a relative path
    pub fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Idempotency key to send, if any.
    ///
    /// Retried POST and PATCH requests get a generated key so the server can
    /// discard replays of a request it already processed.
    fn idempotency_key(&self, request: &ApiRequest) -> Option<String> {
        match &request.options.idempotency_key {
            Some(key) => Some(key.clone()),
            None if !request.method.is_idempotent() && self.retry_config.max_retries > 0 => {
                Some(uuid::Uuid::new_v4().to_string())
            }
            None => None,
        }
    }

    fn build_headers(
        &self,
        options: &RequestOptions,
        request_id: &str,
        idempotency_key: Option<&str>,
    ) -> ClientResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        match &options.accept {
            Some(accept) => headers.insert(ACCEPT, header_value(accept)?),
            None => headers.insert(ACCEPT, HeaderValue::from_static("application/json")),
        };
        headers.insert(AUTHORIZATION, header_value(&format!("Bearer {}", self.api_key))?);
        headers.insert(HeaderName::from_static("x-request-id"), header_value(request_id)?);

        if let Some(key) = idempotency_key {
            headers.insert(HeaderName::from_static("idempotency-key"), header_value(key)?);
        }

        for (name, value) in &options.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ClientError::Validation(format!("Invalid header name `{}`: {}", name, e)))?;
            headers.insert(name, header_value(value)?);
        }

        Ok(headers)
    }

    /// One attempt, no retries
    async fn send_once(&self, request: &ApiRequest, headers: HeaderMap) -> ClientResult<RawResponse> {
        let url = self.build_url(&request.path);

        let mut builder = self
            .client
            .request(request.method.to_reqwest(), &url)
            .headers(headers);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        if let Some(timeout) = request.options.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(map_send_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(map_send_error)?;

        if (200..300).contains(&status) {
            debug!("{} {} -> {}", request.method, request.path, status);
            Ok(RawResponse { status, body: body.to_vec() })
        } else {
            let err = ClientError::api(status, String::from_utf8_lossy(&body));
            error!("API request {} {} failed: {}", request.method, request.path, err);
            Err(err)
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(&self, request: ApiRequest) -> ClientResult<RawResponse> {
        // One id per logical request, shared by its retries
        let request_id = uuid::Uuid::new_v4().to_string();
        let idempotency_key = self.idempotency_key(&request);
        let headers = self.build_headers(&request.options, &request_id, idempotency_key.as_deref())?;

        let mut attempt = 0;
        loop {
            match self.send_once(&request, headers.clone()).await {
                Ok(response) => return Ok(response),
                Err(e) if e.is_retryable() && attempt < self.retry_config.max_retries => {
                    let delay = self.retry_config.delay_for(attempt);
                    attempt += 1;
                    warn!(
                        "Request {} failed ({}), retrying after {}ms (attempt {}/{})",
                        request_id,
                        e,
                        delay.as_millis(),
                        attempt,
                        self.retry_config.max_retries
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

fn header_value(value: &str) -> ClientResult<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| ClientError::Validation(format!("Invalid header value: {}", e)))
}

fn map_send_error(e: reqwest::Error) -> ClientError {
    if e.is_timeout() {
        ClientError::Timeout
    } else {
        ClientError::HttpClient(e)
    }
}
