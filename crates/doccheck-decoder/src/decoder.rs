//! Format dispatch and placeholder folding

use crate::docx::decode_docx;
use crate::pdf::decode_pdf;
use crate::txt::decode_txt;
use crate::{DecodeError, DocumentKind};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Text of one document, or placeholder text when decoding failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    /// Extracted text, or the placeholder message on failure
    pub text: String,

    /// Underlying error message, if decoding failed
    pub error: Option<String>,
}

impl DecodedText {
    /// Whether `text` is a placeholder rather than document content
    pub fn is_placeholder(&self) -> bool {
        self.error.is_some()
    }
}

/// Decode in-memory document bytes
pub fn decode_bytes(kind: DocumentKind, bytes: &[u8]) -> Result<String, DecodeError> {
    match kind {
        DocumentKind::Pdf => decode_pdf(bytes),
        DocumentKind::Docx => decode_docx(bytes),
        DocumentKind::Txt => Ok(decode_txt(bytes)),
    }
}

/// Read a document from disk and decode it
pub fn decode_file(kind: DocumentKind, path: impl AsRef<Path>) -> Result<String, DecodeError> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    debug!("Decoding {} file {} ({} bytes)", kind, path.display(), bytes.len());
    decode_bytes(kind, &bytes)
}

/// Decode a document, substituting placeholder text on failure
///
/// A broken file never aborts a batch: its text becomes
/// `"Error reading <KIND>: <message>"` and flows on like normal content.
pub fn decode_or_placeholder(kind: DocumentKind, path: impl AsRef<Path>) -> DecodedText {
    let path = path.as_ref();
    match decode_file(kind, path) {
        Ok(text) => DecodedText { text, error: None },
        Err(e) => {
            warn!("Failed to decode {}: {}", path.display(), e);
            DecodedText {
                text: placeholder(kind, &e),
                error: Some(e.to_string()),
            }
        }
    }
}

/// Placeholder text standing in for an undecodable document
pub fn placeholder(kind: DocumentKind, error: &DecodeError) -> String {
    format!("Error reading {}: {}", kind.label(), error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;

    fn docx_bytes(document_xml: &str) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/document.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(document_xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_decode_txt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "Budget: $5000\n").unwrap();

        let decoded = decode_or_placeholder(DocumentKind::Txt, &path);
        assert_eq!(decoded.text, "Budget: $5000\n");
        assert!(!decoded.is_placeholder());
    }

    #[test]
    fn test_decode_docx_bytes() {
        let bytes = docx_bytes(
            r#"<w:document><w:body><w:p><w:r><w:t>Team size: 8</w:t></w:r></w:p></w:body></w:document>"#,
        );
        assert_eq!(decode_bytes(DocumentKind::Docx, &bytes).unwrap(), "Team size: 8\n");
    }

    #[test]
    fn test_docx_without_body_part() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer.start_file("other.xml", SimpleFileOptions::default()).unwrap();
        writer.write_all(b"<x/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let result = decode_bytes(DocumentKind::Docx, &bytes);
        assert!(matches!(result, Err(DecodeError::Archive(_))));
    }

    #[test]
    fn test_broken_pdf_becomes_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        fs::write(&path, b"not really a pdf").unwrap();

        let decoded = decode_or_placeholder(DocumentKind::Pdf, &path);
        assert!(decoded.is_placeholder());
        assert!(decoded.text.starts_with("Error reading PDF: "));
    }

    #[test]
    fn test_missing_file_becomes_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let decoded = decode_or_placeholder(DocumentKind::Txt, dir.path().join("absent.txt"));
        assert!(decoded.text.starts_with("Error reading TXT: I/O error"));
        assert!(decoded.error.is_some());
    }
}
