//! Configuration management module
//!
//! Responsible for loading client configuration from environment variables
//! and an optional JSON profile file.

pub mod file;
pub mod settings;

pub use file::ProfileConfig;
pub use settings::{ApiConfig, LoggingConfig, RetrySettings, Settings};
