//! Note CRUD handlers.
//!
//! Every successful mutation rebuilds the semantic index from the full note
//! list before the response is produced, under the same write lock, so a
//! subsequent search reflects the latest state.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::instrument;

use quill_core::{Note, NoteDraft, NoteId};

use crate::{ApiError, AppState};

/// GET /api/notes: the full ordered note list. No filtering, no pagination.
pub async fn list_notes(State(state): State<AppState>) -> Json<Vec<Note>> {
    let catalog = state.catalog.read().await;
    Json(catalog.store.list().to_vec())
}

/// POST /api/notes: add a note, re-index, return 201 with the stored note.
#[instrument(skip_all, fields(component = "api", op = "create_note"))]
pub async fn create_note(
    State(state): State<AppState>,
    Json(draft): Json<NoteDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let mut guard = state.catalog.write().await;
    let catalog = &mut *guard;

    let note = catalog.store.add(draft);
    state
        .reindex
        .rebuild(catalog.store.list(), &mut catalog.index)
        .await?;

    Ok((StatusCode::CREATED, Json(note)))
}

/// PUT /api/notes/:id: full overwrite, re-index, return the updated note.
#[instrument(skip_all, fields(component = "api", op = "update_note", note_id = id))]
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<NoteId>,
    Json(draft): Json<NoteDraft>,
) -> Result<Json<Note>, ApiError> {
    let mut guard = state.catalog.write().await;
    let catalog = &mut *guard;

    let note = catalog.store.update(id, draft)?;
    state
        .reindex
        .rebuild(catalog.store.list(), &mut catalog.index)
        .await?;

    Ok(Json(note))
}

/// DELETE /api/notes/:id: remove, re-index, return the removed note.
#[instrument(skip_all, fields(component = "api", op = "delete_note", note_id = id))]
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<NoteId>,
) -> Result<Json<Note>, ApiError> {
    let mut guard = state.catalog.write().await;
    let catalog = &mut *guard;

    let note = catalog.store.delete(id)?;
    state
        .reindex
        .rebuild(catalog.store.list(), &mut catalog.index)
        .await?;

    Ok(Json(note))
}
