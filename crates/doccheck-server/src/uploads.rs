//! Temporary storage for uploaded documents.
//!
//! Files live on disk only for the duration of one request. Every stored
//! name carries a UUIDv7 prefix so concurrent requests never collide.

use axum::body::Bytes;
use doccheck_decoder::DocumentKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

/// Upload storage error
#[derive(Debug, Error)]
pub enum UploadError {
    /// Creating the upload directory failed
    #[error("Failed to prepare upload directory: {0}")]
    Directory(#[from] std::io::Error),

    /// Writing an uploaded file failed
    #[error("Failed to store upload '{name}': {source}")]
    Write {
        /// Sanitized filename
        name: String,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// A validated upload that has not been written yet
#[derive(Debug, Clone)]
pub struct PendingUpload {
    /// Filename as sent by the client
    pub filename: String,

    /// Format resolved from the filename extension
    pub kind: DocumentKind,

    /// File contents
    pub bytes: Bytes,
}

/// An upload written to the upload directory
#[derive(Debug, Clone)]
pub struct StoredUpload {
    /// Sanitized filename, used as the document id
    pub name: String,

    /// Location on disk
    pub path: PathBuf,

    /// Size in bytes
    pub size: u64,

    /// Document format
    pub kind: DocumentKind,
}

/// Request-scoped file storage rooted at a directory
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// Create a store rooted at `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Root directory of the store
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the upload directory if it does not exist
    pub fn ensure_dir(&self) -> Result<(), UploadError> {
        std::fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    /// Write an upload under a unique name
    pub async fn save(&self, upload: &PendingUpload) -> Result<StoredUpload, UploadError> {
        let name = secure_filename(&upload.filename, upload.kind);
        let path = self
            .dir
            .join(format!("{}_{}", Uuid::now_v7().simple(), name));

        tokio::fs::write(&path, &upload.bytes)
            .await
            .map_err(|source| UploadError::Write {
                name: name.clone(),
                source,
            })?;

        debug!("Stored upload '{}' at {}", name, path.display());

        Ok(StoredUpload {
            name,
            path,
            size: upload.bytes.len() as u64,
            kind: upload.kind,
        })
    }

    /// Delete stored uploads, ignoring failures
    pub async fn remove_all(&self, uploads: &[StoredUpload]) {
        for upload in uploads {
            if let Err(e) = tokio::fs::remove_file(&upload.path).await {
                debug!("Could not remove {}: {}", upload.path.display(), e);
            }
        }
    }
}

/// Reduce a client-supplied filename to a safe, ASCII-only name
///
/// Path separators and whitespace become `_`, anything outside
/// `[A-Za-z0-9._-]` is dropped, and leading or trailing `.`/`_` are trimmed.
/// An empty result falls back to `upload.<ext>`.
pub fn secure_filename(filename: &str, kind: DocumentKind) -> String {
    let spaced = filename.replace(['/', '\\'], " ");
    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");
    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();
    let trimmed = kept.trim_matches(|c| c == '.' || c == '_');

    if trimmed.is_empty() {
        format!("upload.{}", kind.extension())
    } else {
        trimmed.to_string()
    }
}
