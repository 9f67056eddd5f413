//! Contradiction module - a keyword the documents disagree on

use crate::Severity;

/// A keyword whose extracted value differs across two or more documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contradiction {
    /// Keyword the documents disagree on
    pub keyword: String,

    /// (document id, value) for every document holding the keyword,
    /// in corpus order
    pub documents: Vec<(String, String)>,

    /// Distinct values, in first-seen order
    pub values: Vec<String>,

    /// Priority of the disagreement
    pub severity: Severity,
}

impl Contradiction {
    /// Create a contradiction from the per-document values of one keyword
    ///
    /// Distinct values are derived from `documents`.
    pub fn new(
        keyword: impl Into<String>,
        documents: Vec<(String, String)>,
        severity: Severity,
    ) -> Self {
        let mut values: Vec<String> = Vec::new();
        for (_, value) in &documents {
            if !values.contains(value) {
                values.push(value.clone());
            }
        }

        Self {
            keyword: keyword.into(),
            documents,
            values,
            severity,
        }
    }

    /// Value a given document holds for this keyword
    pub fn value_for(&self, document_id: &str) -> Option<&str> {
        self.documents
            .iter()
            .find(|(id, _)| id == document_id)
            .map(|(_, v)| v.as_str())
    }

    /// Number of documents involved
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }
}
