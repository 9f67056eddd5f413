//! Plain text decoding

use tracing::debug;

/// Decode text as UTF-8, falling back to Latin-1
///
/// Latin-1 maps every byte to a character, so this never fails.
pub(crate) fn decode_txt(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(e) => {
            debug!("Text is not UTF-8 ({}), decoding as Latin-1", e);
            bytes.iter().map(|&b| char::from(b)).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8() {
        assert_eq!(decode_txt("Budget: €5000".as_bytes()), "Budget: €5000");
    }

    #[test]
    fn test_latin1_fallback() {
        assert_eq!(decode_txt(&[b'c', b'a', b'f', 0xE9]), "café");
    }

    #[test]
    fn test_empty() {
        assert_eq!(decode_txt(&[]), "");
    }
}
