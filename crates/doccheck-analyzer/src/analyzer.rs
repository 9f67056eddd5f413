//! Contradiction detection logic

use crate::AnalyzerConfig;
use doccheck_domain::traits::ContradictionDetector;
use doccheck_domain::{Contradiction, CorpusKeywordMap, Severity};
use tracing::debug;

/// Keyword → (document, value) entries, keywords in first-seen order
type InvertedIndex<'a> = Vec<(&'a str, Vec<(&'a str, &'a str)>)>;

/// The Analyzer compares keyword values across documents
pub struct ContradictionAnalyzer {
    config: AnalyzerConfig,
}

impl ContradictionAnalyzer {
    /// Create a new Analyzer with the given configuration
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Create an Analyzer with default configuration
    pub fn default_config() -> Self {
        Self::new(AnalyzerConfig::default())
    }

    /// Severity assigned to a contradiction on `keyword`
    pub fn severity_for(&self, keyword: &str) -> Severity {
        if self.config.is_critical(keyword) {
            Severity::High
        } else {
            Severity::Medium
        }
    }

    /// Find keywords whose values disagree across documents
    ///
    /// A keyword is reported when at least two documents hold it and their
    /// values are not all identical. Results follow the order in which
    /// keywords were first seen, scanning documents in corpus order.
    pub fn analyze(&self, corpus: &CorpusKeywordMap) -> Vec<Contradiction> {
        let index = build_index(corpus);
        let mut contradictions = Vec::new();

        for (keyword, entries) in index {
            if entries.len() < 2 {
                continue;
            }

            let first_value = entries[0].1;
            if entries.iter().all(|(_, value)| *value == first_value) {
                continue;
            }

            let documents = entries
                .into_iter()
                .map(|(doc, value)| (doc.to_string(), value.to_string()))
                .collect();
            let contradiction =
                Contradiction::new(keyword, documents, self.severity_for(keyword));

            debug!(
                "Contradiction on '{}' across {} documents ({} values, {})",
                contradiction.keyword,
                contradiction.document_count(),
                contradiction.values.len(),
                contradiction.severity
            );
            contradictions.push(contradiction);
        }

        contradictions
    }
}

impl ContradictionDetector for ContradictionAnalyzer {
    fn detect(&self, corpus: &CorpusKeywordMap) -> Vec<Contradiction> {
        self.analyze(corpus)
    }
}

/// Group every (document, value) pair under its keyword
fn build_index(corpus: &CorpusKeywordMap) -> InvertedIndex<'_> {
    let mut index: InvertedIndex<'_> = Vec::new();

    for (document_id, keywords) in corpus.iter() {
        for (keyword, value) in keywords.iter() {
            match index.iter_mut().find(|(k, _)| *k == keyword) {
                Some((_, entries)) => entries.push((document_id, value)),
                None => index.push((keyword, vec![(document_id, value)])),
            }
        }
    }

    index
}
