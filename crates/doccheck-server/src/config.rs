//! Configuration file parsing for the server.
//!
//! Loads settings from TOML files including bind address, upload limits,
//! and the extractor and analyzer sections.

use doccheck_analyzer::AnalyzerConfig;
use doccheck_extractor::ExtractorConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A field holds an unusable value
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Server configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0")
    pub bind_address: String,

    /// Bind port (e.g., 5000)
    pub bind_port: u16,

    /// Directory for request-scoped temporary uploads
    #[serde(default = "default_upload_dir")]
    pub upload_dir: PathBuf,

    /// Maximum number of files per request (default: 3)
    #[serde(default = "default_max_files")]
    pub max_files: usize,

    /// Maximum request body size in bytes (default: 16 MiB)
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    /// Keyword extraction settings
    #[serde(default)]
    pub extractor: ExtractorConfig,

    /// Contradiction analysis settings
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from("uploads")
}

fn default_max_files() -> usize {
    3
}

/// Default body limit: 16 MiB
fn default_max_upload_bytes() -> usize {
    16 * 1024 * 1024
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check limits and nested sections
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_files == 0 {
            return Err(ConfigError::Invalid("max_files must be greater than 0".to_string()));
        }
        if self.max_upload_bytes == 0 {
            return Err(ConfigError::Invalid(
                "max_upload_bytes must be greater than 0".to_string(),
            ));
        }
        self.extractor
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("extractor: {}", e)))?;
        self.analyzer
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("analyzer: {}", e)))
    }

    /// Create the default configuration (all interfaces, port 5000)
    pub fn default_config() -> Self {
        ServerConfig {
            bind_address: "0.0.0.0".to_string(),
            bind_port: 5000,
            upload_dir: default_upload_dir(),
            max_files: default_max_files(),
            max_upload_bytes: default_max_upload_bytes(),
            extractor: ExtractorConfig::default(),
            analyzer: AnalyzerConfig::default(),
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}
