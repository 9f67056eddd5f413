//! Supported document kinds

use std::fmt;

/// Document formats the decoder understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Portable Document Format
    Pdf,
    /// Office Open XML word processing document
    Docx,
    /// Plain text
    Txt,
}

impl DocumentKind {
    /// Accepted filename extensions, lower-case
    pub const ALLOWED_EXTENSIONS: [&'static str; 3] = ["pdf", "docx", "txt"];

    /// Resolve a kind from a filename extension (case-insensitive)
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            "txt" => Some(DocumentKind::Txt),
            _ => None,
        }
    }

    /// Resolve a kind from the extension after the last `.` of a filename
    ///
    /// # Examples
    ///
    /// ```
    /// use doccheck_decoder::DocumentKind;
    ///
    /// assert_eq!(DocumentKind::from_filename("Plan.PDF"), Some(DocumentKind::Pdf));
    /// assert_eq!(DocumentKind::from_filename("notes"), None);
    /// ```
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, extension) = filename.rsplit_once('.')?;
        Self::from_extension(extension)
    }

    /// Canonical extension, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Docx => "docx",
            DocumentKind::Txt => "txt",
        }
    }

    /// Upper-case label used in messages
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "PDF",
            DocumentKind::Docx => "DOCX",
            DocumentKind::Txt => "TXT",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_filename_case_insensitive() {
        assert_eq!(DocumentKind::from_filename("a.Docx"), Some(DocumentKind::Docx));
        assert_eq!(DocumentKind::from_filename("a.TXT"), Some(DocumentKind::Txt));
    }

    #[test]
    fn test_uses_last_extension() {
        assert_eq!(DocumentKind::from_filename("report.pdf.exe"), None);
        assert_eq!(DocumentKind::from_filename("archive.tar.txt"), Some(DocumentKind::Txt));
    }

    #[test]
    fn test_rejects_unknown_or_missing_extension() {
        assert_eq!(DocumentKind::from_filename("image.png"), None);
        assert_eq!(DocumentKind::from_filename("README"), None);
        assert_eq!(DocumentKind::from_filename("trailing."), None);
    }

    #[test]
    fn test_bare_extension_is_accepted() {
        assert_eq!(DocumentKind::from_filename(".pdf"), Some(DocumentKind::Pdf));
    }

    #[test]
    fn test_allowed_extensions_round_trip() {
        for ext in DocumentKind::ALLOWED_EXTENSIONS {
            let kind = DocumentKind::from_extension(ext).unwrap();
            assert_eq!(kind.extension(), ext);
        }
    }
}
