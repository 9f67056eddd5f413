//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::patterns::{KeywordPatterns, PatternTemplate};
use crate::types::{ExtractionMetadata, ExtractionRequest, ExtractionResult};
use crate::value::{clean_value, is_usable};
use doccheck_domain::{DocumentKeywordMap, ANALYSIS_KEYWORDS};
use std::time::Instant;
use tracing::{debug, info};

/// The Extractor pulls keyword values out of plain document text
///
/// Patterns for the whole vocabulary are compiled once, in `new`, and
/// reused for every document.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    patterns: Vec<KeywordPatterns>,
    config: ExtractorConfig,
}

impl KeywordExtractor {
    /// Create a new Extractor for the analysis vocabulary
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;

        let patterns = ANALYSIS_KEYWORDS
            .iter()
            .map(|keyword| KeywordPatterns::compile(keyword, config.word_boundaries))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "Compiled {} patterns for {} keywords",
            patterns.len() * PatternTemplate::ALL.len(),
            patterns.len()
        );

        Ok(Self { patterns, config })
    }

    /// Create an Extractor with default configuration
    pub fn default_config() -> Result<Self, ExtractorError> {
        Self::new(ExtractorConfig::default())
    }

    /// The active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract keyword values from text
    ///
    /// Matching runs against the lower-cased text, so every value comes back
    /// lower-cased. Keywords without a usable value are left out.
    pub fn extract(&self, text: &str) -> DocumentKeywordMap {
        let lowered = text.to_lowercase();
        let mut found = DocumentKeywordMap::new();

        for keyword_patterns in &self.patterns {
            if let Some((template, value)) = self.select_value(keyword_patterns, &lowered) {
                debug!(
                    "Keyword '{}' matched via {} pattern: '{}'",
                    keyword_patterns.keyword,
                    template.as_str(),
                    value
                );
                found.insert(keyword_patterns.keyword.as_str(), value);
            }
        }

        found
    }

    /// Extract keywords from one document and report what was found
    pub fn extract_document(&self, request: ExtractionRequest<'_>) -> ExtractionResult {
        let started = Instant::now();
        let keywords = self.extract(request.text);

        let metadata = ExtractionMetadata {
            document_id: request.document_id.to_string(),
            text_chars: request.text.chars().count(),
            keyword_count: keywords.len(),
            processing_time_ms: started.elapsed().as_millis() as u64,
        };

        info!(
            "Extracted {} keywords from '{}' ({} chars, {} ms)",
            metadata.keyword_count,
            metadata.document_id,
            metadata.text_chars,
            metadata.processing_time_ms
        );

        ExtractionResult { keywords, metadata }
    }

    /// Value recorded for a keyword
    ///
    /// Each template contributes its first usable match. Templates run in
    /// order and a later template's value replaces an earlier one, so the
    /// last template that yields anything decides.
    fn select_value<'t>(
        &self,
        keyword_patterns: &KeywordPatterns,
        text: &'t str,
    ) -> Option<(PatternTemplate, &'t str)> {
        let mut selected = None;
        for (template, regex) in &keyword_patterns.regexes {
            let usable = regex
                .captures_iter(text)
                .filter_map(|captures| captures.get(1))
                .map(|raw| clean_value(raw.as_str()))
                .find(|value| is_usable(value, self.config.min_value_chars));
            if let Some(value) = usable {
                selected = Some((*template, value));
            }
        }
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> KeywordExtractor {
        KeywordExtractor::default_config().unwrap()
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = ExtractorConfig::default();
        config.min_value_chars = 0;
        let result = KeywordExtractor::new(config);
        assert!(matches!(result, Err(ExtractorError::Config(_))));
    }

    #[test]
    fn test_extract_empty_text() {
        assert!(extractor().extract("").is_empty());
    }

    #[test]
    fn test_colon_lines_in_vocabulary_order() {
        let found = extractor().extract("Deadline: March 1\nBudget: $5000");
        let keywords: Vec<_> = found.keywords().collect();
        assert_eq!(keywords, vec!["budget", "deadline"]);
        assert_eq!(found.get("budget"), Some("$5000"));
    }

    #[test]
    fn test_extract_document_reports_metadata() {
        let result = extractor().extract_document(ExtractionRequest::new(
            "plan.txt",
            "Budget: $5000\nDeadline: März 1",
        ));
        assert_eq!(result.keywords.get("deadline"), Some("märz 1"));
        assert_eq!(result.metadata.document_id, "plan.txt");
        assert_eq!(result.metadata.text_chars, 30);
        assert_eq!(result.metadata.keyword_count, 2);
        assert_eq!(result.keywords.len(), result.metadata.keyword_count);
    }

    #[test]
    fn test_extract_document_empty_text() {
        let result = extractor().extract_document(ExtractionRequest::new("empty.txt", ""));
        assert!(result.keywords.is_empty());
        assert_eq!(result.metadata.text_chars, 0);
        assert_eq!(result.metadata.keyword_count, 0);
    }
}
