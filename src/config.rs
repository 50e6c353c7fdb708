// src/config.rs
// Application configuration, read from a YAML file

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{PdfQaError, Result};

pub const DEFAULT_CONFIG_PATH: &str = "./config.yml";

/// Runtime settings for the server, the Ollama client and the render cycle.
///
/// Every field has a default, so an empty or missing file is a valid config.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub ollama_endpoint: String,
    pub model: String,
    /// Number of characters of joined document text sent to the model
    pub context_char_limit: usize,
    /// `None` waits on the model for as long as it takes
    pub request_timeout_secs: Option<u64>,
    pub max_upload_bytes: usize,
    pub temp_dir: Option<PathBuf>,
    pub log_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8501)),
            ollama_endpoint: "http://localhost:11434".to_string(),
            model: crate::qa::DEFAULT_MODEL.to_string(),
            context_char_limit: 4000,
            request_timeout_secs: None,
            max_upload_bytes: 200 * 1024 * 1024,
            temp_dir: None,
            log_dir: PathBuf::from("./logs"),
        }
    }
}

impl AppConfig {
    /// Load config from `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // serde_yaml reads an empty document as unit, not as an empty map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: AppConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.context_char_limit == 0 {
            return Err(PdfQaError::Config("context_char_limit must be greater than 0".to_string()));
        }
        if self.max_upload_bytes == 0 {
            return Err(PdfQaError::Config("max_upload_bytes must be greater than 0".to_string()));
        }
        if self.model.trim().is_empty() {
            return Err(PdfQaError::Config("model must not be empty".to_string()));
        }

        let endpoint = url::Url::parse(&self.ollama_endpoint)
            .map_err(|e| PdfQaError::Config(format!("invalid ollama_endpoint '{}': {}", self.ollama_endpoint, e)))?;
        match endpoint.scheme() {
            "http" | "https" => Ok(()),
            other => Err(PdfQaError::Config(format!(
                "ollama_endpoint must use http or https, got '{}'",
                other
            ))),
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
