//! HTTP request handlers for the document checker.
//!
//! Implements the upload-and-analyze and health check endpoints using axum.

use crate::pipeline::{AnalysisPipeline, AnalysisReport};
use crate::response::{AnalysisResponse, ErrorResponse, HealthCheckResponse};
use crate::uploads::{PendingUpload, StoredUpload, UploadError, UploadStore};
use axum::{
    body::Bytes,
    extract::{multipart::MultipartError, DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use doccheck_decoder::DocumentKind;
use std::sync::Arc;
use tracing::info;

/// Multipart field carrying the uploaded documents
pub const FILES_FIELD: &str = "files[]";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Request-scoped file storage
    pub uploads: Arc<UploadStore>,
    /// Decode, extract and compare stages
    pub pipeline: Arc<AnalysisPipeline>,
    /// Maximum number of files per request
    pub max_files: usize,
    /// Maximum request body size in bytes
    pub max_upload_bytes: usize,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// The request itself is unacceptable
    BadRequest(String),
    /// The multipart body could not be read
    Multipart(MultipartError),
    /// Storing an upload failed
    Upload(UploadError),
    /// Internal server error
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Multipart(e) => (e.status(), e.body_text()),
            AppError::Upload(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Analysis failed: {}", e),
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Analysis failed: {}", msg),
            ),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<MultipartError> for AppError {
    fn from(e: MultipartError) -> Self {
        AppError::Multipart(e)
    }
}

impl From<UploadError> for AppError {
    fn from(e: UploadError) -> Self {
        AppError::Upload(e)
    }
}

/// A `files[]` part as received, before validation
#[derive(Debug, Clone)]
pub struct FilePart {
    /// Client filename, empty when none was selected
    pub filename: String,
    /// Part contents
    pub bytes: Bytes,
}

/// Collect every `files[]` part of the body, ignoring other fields
async fn read_file_parts(multipart: &mut Multipart) -> Result<Vec<FilePart>, AppError> {
    let mut parts = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILES_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;
        parts.push(FilePart { filename, bytes });
    }

    Ok(parts)
}

/// Check count and file types before anything touches the disk
///
/// Parts with an empty filename are skipped, but still count toward the
/// file limit.
pub fn validate_parts(
    parts: Vec<FilePart>,
    max_files: usize,
) -> Result<Vec<PendingUpload>, AppError> {
    if parts.is_empty() {
        return Err(AppError::BadRequest("No files uploaded".to_string()));
    }
    if parts.len() > max_files {
        return Err(AppError::BadRequest(format!(
            "Maximum {} files allowed",
            max_files
        )));
    }

    let mut pending = Vec::with_capacity(parts.len());
    for part in parts {
        if part.filename.is_empty() {
            continue;
        }
        let kind = DocumentKind::from_filename(&part.filename).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Invalid file type: {}. Only PDF, DOCX, and TXT files are allowed.",
                part.filename
            ))
        })?;
        pending.push(PendingUpload {
            filename: part.filename,
            kind,
            bytes: part.bytes,
        });
    }

    if pending.is_empty() {
        return Err(AppError::BadRequest("No files selected".to_string()));
    }

    Ok(pending)
}

/// POST /upload - Analyze up to `max_files` documents for contradictions
async fn upload_files(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResponse>, AppError> {
    let parts = read_file_parts(&mut multipart).await?;
    let pending = validate_parts(parts, state.max_files)?;

    info!("Received {} files for analysis", pending.len());

    let mut stored = Vec::with_capacity(pending.len());
    let result = store_and_analyze(&state, &pending, &mut stored).await;

    // Temporary files never outlive the request
    state.uploads.remove_all(&stored).await;

    Ok(Json(AnalysisResponse::from(result?)))
}

/// Save every upload, then run the pipeline on the blocking pool
///
/// Successfully stored files are pushed to `stored` even when a later step
/// fails, so the caller can clean them up.
async fn store_and_analyze(
    state: &AppState,
    pending: &[PendingUpload],
    stored: &mut Vec<StoredUpload>,
) -> Result<AnalysisReport, AppError> {
    for upload in pending {
        stored.push(state.uploads.save(upload).await?);
    }
    info!(
        "Stored {} files ({} bytes)",
        stored.len(),
        stored.iter().map(|upload| upload.size).sum::<u64>()
    );

    let pipeline = Arc::clone(&state.pipeline);
    let batch = stored.clone();
    tokio::task::spawn_blocking(move || pipeline.run(&batch))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))
}

/// GET /health - Liveness check
async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse::healthy())
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    let body_limit = state.max_upload_bytes;

    AxumRouter::new()
        .route("/upload", post(upload_files))
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
