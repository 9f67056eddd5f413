//! Doccheck Analyzer
//!
//! Compares keyword values across documents and reports contradictions.
//!
//! The Analyzer provides:
//! - An inverted index of keyword → (document, value)
//! - Detection of keywords whose values differ between documents
//! - Severity classification (`high` for critical keywords)
//!
//! # Examples
//!
//! ```
//! use doccheck_analyzer::{AnalyzerConfig, ContradictionAnalyzer};
//! use doccheck_domain::{CorpusKeywordMap, DocumentKeywordMap, Severity};
//!
//! let mut corpus = CorpusKeywordMap::new();
//! corpus.insert("a.txt", [("budget", "$5000")].into_iter().collect::<DocumentKeywordMap>());
//! corpus.insert("b.txt", [("budget", "$7000")].into_iter().collect::<DocumentKeywordMap>());
//!
//! let analyzer = ContradictionAnalyzer::new(AnalyzerConfig::default());
//! let contradictions = analyzer.analyze(&corpus);
//!
//! assert_eq!(contradictions.len(), 1);
//! assert_eq!(contradictions[0].severity, Severity::High);
//! ```

#![warn(missing_docs)]

mod analyzer;
mod config;

pub use analyzer::ContradictionAnalyzer;
pub use config::AnalyzerConfig;
