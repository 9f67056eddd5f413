//! Error types for document decoding

use thiserror::Error;

/// Errors that can occur while turning a document into text
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Reading the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The PDF library rejected the document
    #[error("{0}")]
    Pdf(String),

    /// The DOCX container could not be opened
    #[error("invalid DOCX archive: {0}")]
    Archive(String),

    /// The DOCX body XML is malformed
    #[error("malformed document XML: {0}")]
    Xml(String),
}

impl From<zip::result::ZipError> for DecodeError {
    fn from(e: zip::result::ZipError) -> Self {
        DecodeError::Archive(e.to_string())
    }
}

impl From<quick_xml::Error> for DecodeError {
    fn from(e: quick_xml::Error) -> Self {
        DecodeError::Xml(e.to_string())
    }
}
