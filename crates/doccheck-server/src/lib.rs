//! Doccheck Server
//!
//! HTTP front of the document checker: accepts up to three PDF, DOCX or TXT
//! uploads, extracts business keyword values from each and reports the
//! keywords whose values disagree across documents.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;
pub mod pipeline;
pub mod response;
pub mod uploads;

use config::ServerConfig;
use handlers::{create_router, AppState};
use pipeline::AnalysisPipeline;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use uploads::UploadStore;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Keyword patterns failed to compile
    #[error("Extractor error: {0}")]
    Extractor(#[from] doccheck_extractor::ExtractorError),

    /// Upload directory could not be prepared
    #[error("Upload error: {0}")]
    Upload(#[from] uploads::UploadError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Build shared state: compile the pipeline and prepare the upload directory
pub fn build_state(config: &ServerConfig) -> Result<AppState, ServerError> {
    let uploads = UploadStore::new(config.upload_dir.clone());
    uploads.ensure_dir()?;

    let pipeline = AnalysisPipeline::from_config(config)?;

    Ok(AppState {
        uploads: Arc::new(uploads),
        pipeline: Arc::new(pipeline),
        max_files: config.max_files,
        max_upload_bytes: config.max_upload_bytes,
    })
}

/// Start the HTTP server
///
/// Builds the application state and serves until the listener fails.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    info!("Starting Smart Doc Checker");
    info!("Bind address: {}", config.bind_addr());
    info!("Upload directory: {}", config.upload_dir.display());
    info!(
        "Limits: {} files, {} bytes per request",
        config.max_files, config.max_upload_bytes
    );

    let state = build_state(&config)?;
    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_state_creates_upload_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ServerConfig::default_config();
        config.upload_dir = dir.path().join("nested").join("uploads");

        let state = build_state(&config).unwrap();
        assert!(config.upload_dir.is_dir());
        assert_eq!(state.uploads.dir(), config.upload_dir.as_path());
        assert_eq!(state.max_files, 3);
    }

    #[test]
    fn test_build_state_rejects_bad_extractor_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ServerConfig::default_config();
        config.upload_dir = dir.path().to_path_buf();
        config.extractor.min_value_chars = 0;

        assert!(matches!(build_state(&config), Err(ServerError::Extractor(_))));
    }
}
