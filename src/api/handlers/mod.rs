use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AppState;
use crate::clients::document;
use crate::models::*;
use crate::pipeline::{self, Generation, PipelineError};

const MISSING_INPUT: &str = "Please provide both a prompt and a BRD document.";

// ============================================================
// Error Handling
// ============================================================

/// Input problems the user can fix are returned verbatim with 400.
fn bad_request(msg: impl Into<String>) -> (StatusCode, String) {
    let msg = msg.into();
    tracing::warn!("Rejected request: {}", msg);
    (StatusCode::BAD_REQUEST, msg)
}

fn not_found() -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, "Session not found".to_string())
}

/// Log an internal error and return a sanitized response to the client.
fn internal_error(e: impl std::fmt::Display) -> (StatusCode, String) {
    tracing::error!("Internal error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}

fn pipeline_error(e: PipelineError) -> (StatusCode, String) {
    match e {
        PipelineError::NoRecords => bad_request(e.to_string()),
        PipelineError::Export(_) => internal_error(e),
    }
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Sessions
// ============================================================

pub async fn create_session(State(state): State<AppState>) -> (StatusCode, Json<SessionSummary>) {
    (StatusCode::CREATED, Json(state.sessions.create()))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSummary>, (StatusCode, String)> {
    state.sessions.get(id).map(Json).ok_or_else(not_found)
}

pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    if state.sessions.remove(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found())
    }
}

/// Records for review. Unknown sessions simply have none.
pub async fn get_records(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Json<Vec<Record>> {
    Json(state.sessions.get_records(id))
}

// ============================================================
// Generate
// ============================================================

struct GenerateForm {
    prompt: String,
    filename: String,
    bytes: Vec<u8>,
}

async fn read_generate_form(
    multipart: &mut Multipart,
) -> Result<GenerateForm, (StatusCode, String)> {
    let mut prompt = String::new();
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| bad_request(format!("Invalid upload: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "prompt" => {
                prompt = field
                    .text()
                    .await
                    .map_err(|e| bad_request(format!("Invalid prompt: {}", e)))?;
            }
            "file" => {
                let filename = field.file_name().unwrap_or("").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| bad_request(format!("Failed to read file data: {}", e)))?;
                file = Some((filename, bytes.to_vec()));
            }
            _ => {}
        }
    }

    let prompt = prompt.trim().to_string();
    match file {
        Some((filename, bytes)) if !prompt.is_empty() && !filename.is_empty() => Ok(GenerateForm {
            prompt,
            filename,
            bytes,
        }),
        _ => Err(bad_request(MISSING_INPUT)),
    }
}

/// Extract the document, ask the model, and replace the session's records.
pub async fn generate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<Generation>, (StatusCode, String)> {
    if state.sessions.get(id).is_none() {
        return Err(not_found());
    }

    let form = read_generate_form(&mut multipart).await?;

    // PDF parsing is CPU-bound and may panic on malformed input
    let filename = form.filename.clone();
    let document_text =
        tokio::task::spawn_blocking(move || document::extract_text(&form.filename, form.bytes))
            .await
            .map_err(|e| {
                tracing::warn!(filename = %filename, "Document extraction aborted: {}", e);
                bad_request("Failed to read document.")
            })?
            .map_err(|e| bad_request(e.to_string()))?;

    let generation = pipeline::generate(state.generator.as_ref(), &document_text, &form.prompt)
        .await
        .map_err(|e| {
            tracing::error!(session_id = %id, "Model call failed: {}", e);
            (StatusCode::BAD_GATEWAY, format!("Error: {}", e))
        })?;

    // The session may have ended or expired while the model was answering
    state
        .sessions
        .set_records(id, generation.records.clone(), generation.output.clone())
        .ok_or_else(not_found)?;

    Ok(Json(generation))
}

// ============================================================
// Issue Creation
// ============================================================

/// Reviewed titles and descriptions to push to the tracker, aligned by position.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreateIssuesInput {
    #[serde(default)]
    pub titles: Vec<String>,
    #[serde(default)]
    pub descriptions: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IssuesResponse {
    pub issues: Vec<IssueCreationOutcome>,
    /// Base URL for linking created issue keys.
    pub tracker_url: Option<String>,
}

pub async fn create_issues(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<CreateIssuesInput>,
) -> Result<Json<IssuesResponse>, (StatusCode, String)> {
    tracing::info!(
        session_id = %id,
        titles = input.titles.len(),
        descriptions = input.descriptions.len(),
        "Creating issues"
    );

    let issues = pipeline::create_batch(state.tracker.as_ref(), &input.titles, &input.descriptions)
        .await
        .map_err(pipeline_error)?;

    Ok(Json(IssuesResponse {
        issues,
        tracker_url: state.tracker.browse_url(),
    }))
}

// ============================================================
// Export
// ============================================================

pub async fn export_records(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let records = state.sessions.get_records(id);
    let writer = state.table_writer.clone();
    let artifact = tokio::task::spawn_blocking(move || pipeline::export(writer.as_ref(), &records))
        .await
        .map_err(internal_error)?
        .map_err(pipeline_error)?;

    Ok((
        [
            (header::CONTENT_TYPE, artifact.content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", artifact.filename),
            ),
        ],
        artifact.bytes,
    ))
}
