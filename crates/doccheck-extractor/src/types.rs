//! Request and response types for per-document extraction

use doccheck_domain::DocumentKeywordMap;

/// Request to extract keywords from one document
#[derive(Debug, Clone, Copy)]
pub struct ExtractionRequest<'a> {
    /// Document identifier (sanitized filename)
    pub document_id: &'a str,

    /// Decoded document text
    pub text: &'a str,
}

impl<'a> ExtractionRequest<'a> {
    /// Create a request for a document's text
    pub fn new(document_id: &'a str, text: &'a str) -> Self {
        Self { document_id, text }
    }
}

/// Result of extracting one document
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Keyword values found
    pub keywords: DocumentKeywordMap,

    /// Metadata about the extraction
    pub metadata: ExtractionMetadata,
}

/// Metadata about an extraction operation
#[derive(Debug, Clone)]
pub struct ExtractionMetadata {
    /// Document identifier
    pub document_id: String,

    /// Length of the input text in characters
    pub text_chars: usize,

    /// Number of keywords with a usable value
    pub keyword_count: usize,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}
