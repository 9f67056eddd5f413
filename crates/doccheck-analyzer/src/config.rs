//! Analyzer configuration

use doccheck_domain::keyword::is_known_keyword;
use doccheck_domain::CRITICAL_KEYWORDS;
use serde::{Deserialize, Serialize};

/// Configuration for contradiction analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Keywords whose contradictions are reported with high severity
    pub critical_keywords: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            critical_keywords: CRITICAL_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl AnalyzerConfig {
    /// Whether a keyword is in the critical set
    pub fn is_critical(&self, keyword: &str) -> bool {
        self.critical_keywords.iter().any(|k| k == keyword)
    }

    /// Every critical keyword must belong to the analysis vocabulary
    pub fn validate(&self) -> Result<(), String> {
        match self.critical_keywords.iter().find(|k| !is_known_keyword(k)) {
            Some(unknown) => Err(format!(
                "critical keyword '{}' is not in the analysis vocabulary",
                unknown
            )),
            None => Ok(()),
        }
    }
}
