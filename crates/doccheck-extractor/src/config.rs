//! Configuration for the Extractor

use serde::{Deserialize, Serialize};

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Minimum length of a kept value, in characters
    pub min_value_chars: usize,

    /// Require keywords to start and end on a word boundary.
    ///
    /// Off by default: a keyword also matches inside a longer word
    /// ("target" in "subtarget"). Turning this on changes which values are
    /// reported and should be treated as a behavioral change.
    pub word_boundaries: bool,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.min_value_chars == 0 {
            return Err("min_value_chars must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    /// Default configuration: two-character values, no word boundaries
    fn default() -> Self {
        Self {
            min_value_chars: 2,
            word_boundaries: false,
        }
    }
}

impl ExtractorConfig {
    /// Strict preset: keywords only match as whole words
    pub fn strict() -> Self {
        Self {
            word_boundaries: true,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
