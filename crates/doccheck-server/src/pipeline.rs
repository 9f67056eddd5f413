//! Decode, extract and compare a batch of stored uploads.

use crate::config::ServerConfig;
use crate::uploads::StoredUpload;
use chrono::{DateTime, Local};
use doccheck_analyzer::ContradictionAnalyzer;
use doccheck_decoder::decode_or_placeholder;
use doccheck_domain::traits::ContradictionDetector;
use doccheck_domain::{Contradiction, CorpusKeywordMap};
use doccheck_extractor::{ExtractionRequest, ExtractorError, KeywordExtractor};
use std::sync::Arc;
use tracing::{debug, info};

/// Outcome of analyzing one batch of documents
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// Number of documents analyzed
    pub files_processed: usize,

    /// Keyword values found per document, in upload order
    pub documents: CorpusKeywordMap,

    /// Keywords whose values disagree across documents
    pub contradictions: Vec<Contradiction>,

    /// Local time the analysis finished
    pub completed_at: DateTime<Local>,
}

/// The extraction and comparison stages behind `POST /upload`
pub struct AnalysisPipeline {
    extractor: Arc<KeywordExtractor>,
    detector: Arc<dyn ContradictionDetector + Send + Sync>,
}

impl AnalysisPipeline {
    /// Assemble a pipeline from explicit stages
    pub fn new(
        extractor: Arc<KeywordExtractor>,
        detector: Arc<dyn ContradictionDetector + Send + Sync>,
    ) -> Self {
        Self {
            extractor,
            detector,
        }
    }

    /// Build the regex extractor and analyzer from server configuration
    pub fn from_config(config: &ServerConfig) -> Result<Self, ExtractorError> {
        let extractor = KeywordExtractor::new(config.extractor.clone())?;
        let analyzer = ContradictionAnalyzer::new(config.analyzer.clone());
        Ok(Self::new(Arc::new(extractor), Arc::new(analyzer)))
    }

    /// Analyze stored uploads
    ///
    /// Blocking: reads files and runs decoders. Undecodable files contribute
    /// their placeholder text instead of failing the batch.
    pub fn run(&self, uploads: &[StoredUpload]) -> AnalysisReport {
        let mut documents = CorpusKeywordMap::new();

        for upload in uploads {
            let decoded = decode_or_placeholder(upload.kind, &upload.path);
            if decoded.is_placeholder() {
                debug!("Document '{}' analyzed from placeholder text", upload.name);
            }
            let result = self
                .extractor
                .extract_document(ExtractionRequest::new(&upload.name, &decoded.text));
            documents.insert(upload.name.clone(), result.keywords);
        }

        let contradictions = self.detector.detect(&documents);

        info!(
            "Analyzed {} files: {} documents, {} contradictions",
            uploads.len(),
            documents.len(),
            contradictions.len()
        );

        AnalysisReport {
            files_processed: uploads.len(),
            documents,
            contradictions,
            completed_at: Local::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doccheck_decoder::DocumentKind;
    use doccheck_domain::Severity;
    use std::path::Path;

    /// Reports every keyword held by two or more documents, agreeing or not
    struct SharedKeywords;

    impl ContradictionDetector for SharedKeywords {
        fn detect(&self, corpus: &CorpusKeywordMap) -> Vec<Contradiction> {
            let mut shared: Vec<Contradiction> = Vec::new();
            for keyword in doccheck_domain::ANALYSIS_KEYWORDS {
                let documents: Vec<(String, String)> = corpus
                    .iter()
                    .filter_map(|(id, map)| {
                        map.get(keyword).map(|v| (id.to_string(), v.to_string()))
                    })
                    .collect();
                if documents.len() >= 2 {
                    shared.push(Contradiction::new(*keyword, documents, Severity::Medium));
                }
            }
            shared
        }
    }

    fn store(dir: &Path, name: &str, contents: &[u8], kind: DocumentKind) -> StoredUpload {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        StoredUpload {
            name: name.to_string(),
            path,
            size: contents.len() as u64,
            kind,
        }
    }

    fn default_pipeline() -> AnalysisPipeline {
        AnalysisPipeline::from_config(&ServerConfig::default_config()).unwrap()
    }

    #[test]
    fn test_empty_batch() {
        let report = default_pipeline().run(&[]);
        assert_eq!(report.files_processed, 0);
        assert!(report.documents.is_empty());
        assert!(report.contradictions.is_empty());
    }

    #[test]
    fn test_two_documents_conflict() {
        let dir = tempfile::tempdir().unwrap();
        let uploads = vec![
            store(dir.path(), "a.txt", b"Budget: $5000\nDeadline: March 1", DocumentKind::Txt),
            store(dir.path(), "b.txt", b"Budget: $7000\nDeadline: April 15", DocumentKind::Txt),
        ];

        let report = default_pipeline().run(&uploads);
        assert_eq!(report.files_processed, 2);
        assert_eq!(report.documents.get("a.txt").unwrap().get("budget"), Some("$5000"));
        assert_eq!(report.documents.get("b.txt").unwrap().get("deadline"), Some("april 15"));

        let keywords: Vec<_> = report.contradictions.iter().map(|c| c.keyword.as_str()).collect();
        assert_eq!(keywords, vec!["budget", "deadline"]);
        assert!(report.contradictions.iter().all(|c| c.severity == Severity::High));
    }

    #[test]
    fn test_broken_file_uses_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let uploads = vec![
            store(dir.path(), "broken.pdf", b"not a pdf", DocumentKind::Pdf),
            store(dir.path(), "ok.txt", b"Goal: ship it", DocumentKind::Txt),
        ];

        let report = default_pipeline().run(&uploads);
        assert_eq!(report.files_processed, 2);
        assert!(report.documents.get("broken.pdf").is_some());
        assert_eq!(report.documents.get("ok.txt").unwrap().get("goal"), Some("ship it"));
    }

    #[test]
    fn test_missing_file_uses_placeholder() {
        let upload = StoredUpload {
            name: "gone.txt".to_string(),
            path: Path::new("/nonexistent/doccheck/gone.txt").to_path_buf(),
            size: 0,
            kind: DocumentKind::Txt,
        };
        let report = default_pipeline().run(&[upload]);
        assert!(report.documents.get("gone.txt").unwrap().is_empty());
    }

    #[test]
    fn test_custom_detector() {
        let dir = tempfile::tempdir().unwrap();
        let uploads = vec![
            store(dir.path(), "a.txt", b"Goal: ship it", DocumentKind::Txt),
            store(dir.path(), "b.txt", b"Goal: ship it", DocumentKind::Txt),
        ];

        let pipeline = AnalysisPipeline::new(
            Arc::new(KeywordExtractor::default_config().unwrap()),
            Arc::new(SharedKeywords),
        );
        let report = pipeline.run(&uploads);
        assert_eq!(report.contradictions.len(), 1);
        assert_eq!(report.contradictions[0].keyword, "goal");
        assert_eq!(report.contradictions[0].values, vec!["ship it"]);
    }

    #[test]
    fn test_duplicate_names_keep_latest() {
        let dir = tempfile::tempdir().unwrap();
        let first = store(dir.path(), "a.txt", b"Budget: $1", DocumentKind::Txt);
        let mut second = store(dir.path(), "a2.txt", b"Budget: $2", DocumentKind::Txt);
        second.name = "a.txt".to_string();

        let report = default_pipeline().run(&[first, second]);
        assert_eq!(report.files_processed, 2);
        assert_eq!(report.documents.len(), 1);
        assert_eq!(report.documents.get("a.txt").unwrap().get("budget"), Some("$2"));
        assert!(report.contradictions.is_empty());
    }
}
