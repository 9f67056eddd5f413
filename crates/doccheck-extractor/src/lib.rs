//! Doccheck Extractor
//!
//! Pulls business keyword values ("budget", "deadline", ...) out of plain
//! document text.
//!
//! # Overview
//!
//! Every keyword of the analysis vocabulary is searched with five fixed
//! phrasings, tried in order:
//!
//! 1. `<keyword>` followed by `:`, whitespace or `=`
//! 2. `<keyword> is <value>`
//! 3. `<keyword> of <value>`
//! 4. `the <keyword> is <value>`
//! 5. `a <keyword> of <value>`
//!
//! A value runs up to the next newline, comma, period or semicolon. Each
//! phrasing contributes its first usable match and later phrasings replace
//! earlier ones; values shorter than two characters are dropped.
//! Matching is done on the lower-cased text, so values are lower-case.
//!
//! # Architecture
//!
//! ```text
//! Text → Extractor → DocumentKeywordMap → Analyzer
//! ```
//!
//! # Example Usage
//!
//! ```
//! use doccheck_extractor::{KeywordExtractor, ExtractorConfig};
//!
//! let extractor = KeywordExtractor::new(ExtractorConfig::default()).unwrap();
//! let found = extractor.extract("Budget: $5000\nDeadline: March 1");
//!
//! assert_eq!(found.get("budget"), Some("$5000"));
//! assert_eq!(found.get("deadline"), Some("march 1"));
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod patterns;
mod types;
mod value;


pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::KeywordExtractor;
pub use patterns::PatternTemplate;
pub use types::{ExtractionMetadata, ExtractionRequest, ExtractionResult};
