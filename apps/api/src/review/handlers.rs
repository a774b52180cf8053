//! Axum route handlers for the Review API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::review::engine::ReviewReport;
use crate::review::ingest::{text_of, validate_upload, IngestError};
use crate::state::AppState;

/// Multipart field carrying the uploaded PDF.
pub const RESUME_FIELD: &str = "resume";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ReviewTextRequest {
    pub text: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewSource {
    Pdf,
    Text,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    /// Log-correlation id only; reviews are never stored.
    pub review_id: Uuid,
    pub evaluated_at: DateTime<Utc>,
    pub source: ReviewSource,
    #[serde(flatten)]
    pub report: ReviewReport,
}

#[derive(Debug, Serialize)]
pub struct VocabularyResponse {
    pub known: Vec<String>,
    pub required: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/review
///
/// Accepts a multipart upload with the PDF in the `resume` field, extracts its
/// text and returns the review.
pub async fn handle_review_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ReviewResponse>, AppError> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let file_name = field.file_name().map(String::from);
        let bytes = field.bytes().await?;
        upload = Some((file_name, bytes));
        break;
    }

    let (file_name, bytes) = upload.ok_or(IngestError::MissingFile)?;
    validate_upload(file_name.as_deref(), &bytes)?;
    let text = text_of(bytes.to_vec()).await?;

    Ok(Json(review(&state, &text, ReviewSource::Pdf)))
}

/// POST /api/v1/review/text
///
/// Reviews text that was already extracted by the caller.
pub async fn handle_review_text(
    State(state): State<AppState>,
    Json(request): Json<ReviewTextRequest>,
) -> Result<Json<ReviewResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }
    Ok(Json(review(&state, &request.text, ReviewSource::Text)))
}

/// GET /api/v1/vocabulary
pub async fn handle_vocabulary(State(state): State<AppState>) -> Json<VocabularyResponse> {
    let vocab = state.engine.vocabulary();
    Json(VocabularyResponse {
        known: vocab.known().to_vec(),
        required: vocab.required().to_vec(),
    })
}

fn review(state: &AppState, text: &str, source: ReviewSource) -> ReviewResponse {
    let review_id = Uuid::new_v4();
    let report = state.engine.evaluate(text);
    info!(
        %review_id,
        ?source,
        total = report.total,
        suggestions = report.suggestions.len(),
        "Resume reviewed"
    );
    ReviewResponse {
        review_id,
        evaluated_at: Utc::now(),
        source,
        report,
    }
}
