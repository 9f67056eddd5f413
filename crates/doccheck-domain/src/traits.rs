//! Trait definitions for the analysis seams
//!
//! These traits define the boundaries between the domain model and the
//! crates that implement comparison.

use crate::{Contradiction, CorpusKeywordMap};

/// Trait for comparing keyword values across documents
///
/// Implemented by the application layer (doccheck-analyzer)
pub trait ContradictionDetector {
    /// Find keywords whose values disagree across documents
    fn detect(&self, corpus: &CorpusKeywordMap) -> Vec<Contradiction>;
}
