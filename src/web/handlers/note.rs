//! Note handlers for the notedrive API.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use utoipa;

use crate::note::{NewNote, NoteUpdate};
use crate::web::dto::{
    CreateNoteRequest, NoteResponse, NoteSummaryResponse, UpdateNoteRequest, ValidatedJson,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// GET /api/note - List all notes.
#[utoipa::path(
    get,
    path = "/api/note",
    tag = "note",
    responses(
        (status = 200, description = "List of notes, titles and IDs only", body = Vec<NoteSummaryResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_notes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<NoteSummaryResponse>>, ApiError> {
    let notes = state.repo.list().await?;
    Ok(Json(
        notes.into_iter().map(NoteSummaryResponse::from).collect(),
    ))
}

/// GET /api/note/:id - Get a single note with its content.
#[utoipa::path(
    get,
    path = "/api/note/{id}",
    tag = "note",
    params(
        ("id" = String, Path, description = "Note ID")
    ),
    responses(
        (status = 200, description = "Note with content", body = NoteResponse),
        (status = 404, description = "Note not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<NoteResponse>, ApiError> {
    let note = state.repo.get(&id).await?;
    Ok(Json(NoteResponse::from(note)))
}

/// POST /api/note - Create a note.
#[utoipa::path(
    post,
    path = "/api/note",
    tag = "note",
    request_body = CreateNoteRequest,
    responses(
        (status = 201, description = "Note created; Location points at the new note", body = NoteResponse),
        (status = 400, description = "Invalid request body"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_note(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<CreateNoteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let note = state
        .repo
        .create(NewNote::new(req.title, req.content))
        .await?;

    let location = format!("/api/note/{}", note.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(NoteResponse::from(note)),
    ))
}

/// PUT /api/note/:id - Update a note's title and/or content.
#[utoipa::path(
    put,
    path = "/api/note/{id}",
    tag = "note",
    params(
        ("id" = String, Path, description = "Note ID")
    ),
    request_body = UpdateNoteRequest,
    responses(
        (status = 200, description = "Note updated", body = NoteResponse),
        (status = 400, description = "Invalid or empty request body"),
        (status = 404, description = "Note not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateNoteRequest>,
) -> Result<Json<NoteResponse>, ApiError> {
    if req.is_empty() {
        return Err(ApiError::bad_request(
            "At least one of title or content must be provided",
        ));
    }

    let mut update = NoteUpdate::new();
    if let Some(title) = req.title {
        update = update.with_title(title);
    }
    if let Some(content) = req.content {
        update = update.with_content(content);
    }

    let note = state.repo.update(&id, update).await?;
    Ok(Json(NoteResponse::from(note)))
}

/// DELETE /api/note/:id - Delete a note.
#[utoipa::path(
    delete,
    path = "/api/note/{id}",
    tag = "note",
    params(
        ("id" = String, Path, description = "Note ID")
    ),
    responses(
        (status = 204, description = "Note deleted"),
        (status = 404, description = "Note not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.repo.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
