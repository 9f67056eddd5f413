//! PDF text extraction wrapper
//!
//! Wraps the pdf-extract crate. The underlying parser panics on some
//! malformed inputs; those panics are turned into decode errors.

use crate::DecodeError;
use std::panic;

/// Extract full text from PDF bytes
pub(crate) fn decode_pdf(bytes: &[u8]) -> Result<String, DecodeError> {
    match panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes)) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(DecodeError::Pdf(e.to_string())),
        Err(_) => Err(DecodeError::Pdf("PDF parser aborted on malformed input".to_string())),
    }
}
