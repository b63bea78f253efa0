//! Note-generation endpoint
//!
//! The single pipeline of the application: parse the form the UI submits,
//! extract text from the uploaded materials, compose the prompt pair, call
//! the completion service, and hand the notes back. Per-file extraction
//! problems ride along as diagnostics instead of failing the request.

use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::{routing::post, Json, Router};
use chrono::NaiveDate;
use serde::Serialize;

use crate::adapters::readers::ReaderRegistry;
use crate::domain::models::{
    DetailLevel, ExtractionDiagnostic, GeneratedNotes, MeetingContext, MeetingType, UploadedFile,
};
use crate::domain::prompts;
use crate::error::{AppError, Result};
use crate::ports::llm::{CompletionPort, LlmConfig};
use crate::AppState;

/// Uploads beyond this size are rejected outright.
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

const MEETING_DATE_FORMAT: &str = "%m/%d/%Y";

/// Parsed note-generation form
#[derive(Debug)]
pub struct NotesRequest {
    pub transcript: String,
    pub context: MeetingContext,
    pub detail_level: DetailLevel,
}

/// Generated notes plus the extraction diagnostics gathered on the way
#[derive(Debug, Serialize)]
pub struct NotesResponse {
    #[serde(flatten)]
    pub notes: GeneratedNotes,
    pub diagnostics: Vec<ExtractionDiagnostic>,
}

async fn parse_request(mut multipart: Multipart) -> Result<NotesRequest> {
    let mut transcript = String::new();
    let mut meeting_type = MeetingType::Other;
    let mut date = None;
    let mut detail_level = DetailLevel::Standard;
    let mut materials = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("malformed form data: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "transcript" => {
                transcript = field
                    .text()
                    .await
                    .map_err(|e| AppError::InvalidInput(format!("unreadable transcript: {e}")))?;
            }
            "meeting_type" => {
                let label = field
                    .text()
                    .await
                    .map_err(|e| AppError::InvalidInput(format!("unreadable meeting_type: {e}")))?;
                meeting_type = MeetingType::from_label(&label);
            }
            "meeting_date" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::InvalidInput(format!("unreadable meeting_date: {e}")))?;
                let parsed = NaiveDate::parse_from_str(&text, MEETING_DATE_FORMAT)
                    .map_err(|_| {
                        AppError::InvalidInput(format!(
                            "meeting_date must be MM/DD/YYYY, got {text:?}"
                        ))
                    })?;
                date = Some(parsed);
            }
            "detail_level" => {
                let label = field
                    .text()
                    .await
                    .map_err(|e| AppError::InvalidInput(format!("unreadable detail_level: {e}")))?;
                detail_level = DetailLevel::from_label(&label).ok_or_else(|| {
                    AppError::InvalidInput(format!("unknown detail_level {label:?}"))
                })?;
            }
            "materials" => {
                let filename = field.file_name().map(str::to_string).ok_or_else(|| {
                    AppError::InvalidInput("materials part is missing a filename".to_string())
                })?;
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::InvalidInput(format!("unreadable upload {filename:?}: {e}"))
                })?;
                materials.push(UploadedFile::new(filename, bytes.to_vec()));
            }
            other => {
                log::debug!("Ignoring unknown form field {other:?}");
            }
        }
    }

    if transcript.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "transcript must not be empty".to_string(),
        ));
    }
    let date =
        date.ok_or_else(|| AppError::InvalidInput("meeting_date is required".to_string()))?;

    Ok(NotesRequest {
        transcript,
        context: MeetingContext {
            date,
            meeting_type,
            materials,
        },
        detail_level,
    })
}

/// Run one note-generation request end to end.
pub async fn run_pipeline(
    readers: Arc<ReaderRegistry>,
    llm: Arc<dyn CompletionPort>,
    config: &LlmConfig,
    request: NotesRequest,
) -> Result<NotesResponse> {
    let NotesRequest {
        transcript,
        context,
        detail_level,
    } = request;

    // Extraction is synchronous CPU work (and OCR shells out); keep it off
    // the async executor. Files are still processed in upload order.
    let (context, materials) = tokio::task::spawn_blocking(move || {
        let materials = readers.extract_all(&context.materials);
        (context, materials)
    })
    .await
    .map_err(|e| AppError::Other(format!("extraction task failed: {e}")))?;

    let prompt = prompts::build_notes_prompt(&transcript, &context, detail_level, &materials);
    let notes = llm.complete(&prompt, config).await?;

    Ok(NotesResponse {
        notes: GeneratedNotes {
            notes,
            meeting_type: context.meeting_type,
            detail_level,
            model: config.model.clone(),
        },
        diagnostics: materials.diagnostics,
    })
}

/// POST /api/notes
pub async fn generate_notes(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<NotesResponse>> {
    let request = parse_request(multipart).await?;

    log::info!(
        "Generating {} notes for a {} meeting with {} uploaded materials",
        request.detail_level,
        request.context.meeting_type,
        request.context.materials.len()
    );

    let response = run_pipeline(
        state.readers.clone(),
        state.llm.clone(),
        &state.llm_config,
        request,
    )
    .await?;
    Ok(Json(response))
}

/// Build note-generation routes
pub fn notes_routes() -> Router<AppState> {
    Router::new()
        .route("/api/notes", post(generate_notes))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}
