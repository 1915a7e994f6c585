//! File-based configuration loading
//!
//! Loads an optional JSON profile holding connection defaults

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Profile file name in the working directory
pub const LOCAL_PROFILE: &str = "casedev.json";

/// Connection defaults loaded from a JSON profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// API key (optional, the environment wins)
    #[serde(rename = "apiKey", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// API base URL (optional)
    #[serde(rename = "baseUrl", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Request timeout in seconds (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,

    /// Maximum retry attempts (optional)
    #[serde(rename = "maxRetries", skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<u32>,
}

impl ProfileConfig {
    /// Load a profile from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading profile from: {:?}", path);

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile file: {:?}", path))?;

        let profile: ProfileConfig = serde_json::from_str(&content)
            .with_context(|| "Failed to parse profile JSON")?;

        profile.validate()?;

        debug!("Profile sets base URL: {}", profile.base_url.is_some());
        Ok(profile)
    }

    /// Load the profile from the default locations.
    ///
    /// Searches in order:
    /// 1. ~/.config/casedev/config.json
    /// 2. ./casedev.json
    ///
    /// Returns `None` when neither file exists.
    pub fn load_default() -> Result<Option<Self>> {
        for path in Self::search_paths() {
            if path.exists() {
                return Self::load(&path).map(Some);
            }
        }
        debug!("No profile file found, using environment only");
        Ok(None)
    }

    /// Candidate profile locations, highest priority first
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("casedev").join("config.json"));
        }
        paths.push(PathBuf::from(LOCAL_PROFILE));
        paths
    }

    /// Validate profile values
    fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.base_url {
            if !base_url.starts_with("http") {
                anyhow::bail!("Invalid base URL in profile: {}", base_url);
            }
        }

        if self.timeout == Some(0) {
            anyhow::bail!("Profile timeout cannot be 0");
        }

        Ok(())
    }
}
