//! Doccheck Decoder
//!
//! Turns uploaded documents into plain text.
//!
//! Supported formats:
//! - **PDF** via `pdf-extract`
//! - **DOCX** by reading `word/document.xml` from the ZIP container
//! - **TXT** as UTF-8, falling back to Latin-1
//!
//! Decoding failures can be folded into placeholder text with
//! [`decode_or_placeholder`], so one broken file does not stop a batch.

#![warn(missing_docs)]

mod decoder;
mod docx;
mod error;
mod kind;
mod pdf;
mod txt;

pub use decoder::{decode_bytes, decode_file, decode_or_placeholder, placeholder, DecodedText};
pub use error::DecodeError;
pub use kind::DocumentKind;
