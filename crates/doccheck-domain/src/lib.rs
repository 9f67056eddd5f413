//! Doccheck Domain Layer
//!
//! Core model for cross-document keyword comparison. Like every domain layer
//! in this workspace it has ZERO external dependencies and defines the
//! vocabulary, value objects, and seam traits the other crates build on.
//!
//! ## Key Concepts
//!
//! - **Keyword**: a term from the fixed analysis vocabulary
//! - **DocumentKeywordMap**: keyword → first value found in one document
//! - **CorpusKeywordMap**: document id → keyword map, for one request
//! - **Contradiction**: a keyword whose value differs between documents
//! - **Severity**: `high` for critical keywords, `medium` otherwise

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contradiction;
pub mod keyword;
pub mod keyword_map;
pub mod severity;
pub mod traits;

// Re-exports for convenience
pub use contradiction::Contradiction;
pub use keyword::{ANALYSIS_KEYWORDS, CRITICAL_KEYWORDS};
pub use keyword_map::{CorpusKeywordMap, DocumentKeywordMap};
pub use severity::Severity;
