//! Client configuration settings
//!
//! Defines the configuration structures and the environment loading logic.
//! A profile file, when present, supplies defaults that environment
//! variables override.

use super::file::ProfileConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.case.dev";

/// Main client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// API connection configuration
    pub api: ApiConfig,
    /// Transport retry configuration
    pub retry: RetrySettings,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// API connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API key sent as a bearer token
    pub api_key: String,
    /// API base URL
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout: u64,
}

/// Transport retry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrySettings {
    /// Maximum retry attempts after the first try
    pub max_retries: u32,
    /// Base delay time (milliseconds)
    pub base_delay_ms: u64,
    /// Maximum delay time (milliseconds)
    pub max_delay_ms: u64,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_delay_ms: 500,
            max_delay_ms: 8000,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or filter directive
    pub level: String,
    /// Log format (text/json)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

impl Settings {
    /// Create settings from the environment (and `.env`, if present)
    pub fn new() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok(), None)
    }

    /// Create settings from the default profile file overlaid with the environment
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();
        let profile = ProfileConfig::load_default()?;
        Self::from_lookup(|key| std::env::var(key).ok(), profile)
    }

    /// Create settings with defaults for everything but the API key
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                api_key: api_key.into(),
                base_url: DEFAULT_BASE_URL.to_string(),
                timeout: 60,
            },
            retry: RetrySettings::default(),
            logging: LoggingConfig::default(),
        }
    }

    /// Point the client at another endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Build settings from a variable lookup and an optional profile.
    ///
    /// Variables win over profile values; profile values win over defaults.
    pub fn from_lookup<F>(lookup: F, profile: Option<ProfileConfig>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let profile = profile.unwrap_or_default();
        let get = |key: &str, fallback: Option<String>, default: &str| -> String {
            lookup(key)
                .or(fallback)
                .unwrap_or_else(|| default.to_string())
        };

        let api_key = lookup("CASEDEV_API_KEY")
            .or(profile.api_key)
            .context("CASEDEV_API_KEY environment variable not set")?;

        let defaults = RetrySettings::default();
        let settings = Self {
            api: ApiConfig {
                api_key,
                base_url: get("CASEDEV_BASE_URL", profile.base_url, DEFAULT_BASE_URL),
                timeout: get("CASEDEV_TIMEOUT", profile.timeout.map(|t| t.to_string()), "60")
                    .parse()
                    .context("Invalid timeout value")?,
            },
            retry: RetrySettings {
                max_retries: get("CASEDEV_MAX_RETRIES", profile.max_retries.map(|r| r.to_string()), "2")
                    .parse()
                    .context("Invalid maximum retries")?,
                ..defaults
            },
            logging: LoggingConfig {
                level: get("RUST_LOG", None, "info"),
                format: get("LOG_FORMAT", None, "text"),
            },
        };

        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration validity
    pub fn validate(&self) -> Result<()> {
        self.validate_connection()?;

        tracing_subscriber::EnvFilter::try_new(&self.logging.level)
            .with_context(|| format!("Invalid log level: {}", self.logging.level))?;

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            anyhow::bail!("Invalid log format: {}", self.logging.format);
        }

        Ok(())
    }

    /// Validate only what the HTTP transport needs
    pub fn validate_connection(&self) -> Result<()> {
        if self.api.api_key.is_empty() {
            anyhow::bail!("API key cannot be empty");
        }

        if self.api.api_key.contains(char::is_whitespace) {
            anyhow::bail!("API key cannot contain whitespace characters");
        }

        if !self.api.base_url.starts_with("http") {
            anyhow::bail!("Invalid base URL format, should start with 'http'");
        }

        if self.api.timeout == 0 {
            anyhow::bail!("Timeout value cannot be 0");
        }

        if self.retry.base_delay_ms > self.retry.max_delay_ms {
            anyhow::bail!("Retry base delay cannot exceed the maximum delay");
        }

        Ok(())
    }
}
