//! DOCX text extraction
//!
//! A DOCX file is a ZIP container; the body lives in `word/document.xml`.
//! Text runs (`w:t`) are concatenated, and every paragraph (`w:p`) ends
//! with a newline. Only body paragraphs are read: anything inside a table
//! (`w:tbl`) is skipped.

use crate::DecodeError;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};

/// Archive entry holding the document body
const DOCUMENT_PART: &str = "word/document.xml";

/// Extract paragraph text from DOCX bytes
pub(crate) fn decode_docx(bytes: &[u8]) -> Result<String, DecodeError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;

    let mut xml = String::new();
    archive.by_name(DOCUMENT_PART)?.read_to_string(&mut xml)?;

    paragraph_text(&xml)
}

/// Walk the body XML and collect visible text
fn paragraph_text(xml: &str) -> Result<String, DecodeError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_text_run = false;
    // nesting depth of w:tbl elements
    let mut table_depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:tbl" => table_depth += 1,
                b"w:t" if table_depth == 0 => in_text_run = true,
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:tbl" => table_depth = table_depth.saturating_sub(1),
                _ if table_depth > 0 => {}
                b"w:t" => in_text_run = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Event::Empty(_) if table_depth > 0 => {}
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => text.push('\t'),
                b"w:br" | b"w:cr" | b"w:p" => text.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_text_run => text.push_str(&t.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}
