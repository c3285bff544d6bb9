//! Note CRUD handlers.
//!
//! Each handler forwards to the note service and wraps the result in a 200.
//! The list and create handlers bump their counter before the service call,
//! so the counters track attempts.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use notes_core::error::Result;
use notes_core::{Note, NoteId};

use crate::api::ApiError;
use crate::app_state::AppState;

pub async fn all_notes(
    State(state): State<AppState>,
) -> std::result::Result<Json<Vec<Note>>, ApiError> {
    state.metrics().get_all_notes.inc();
    let notes = observe(&state, "list", state.service().get_all_notes().await)?;
    tracing::debug!(count = notes.len(), "list notes");
    Ok(Json(notes))
}

pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<NoteId>,
) -> std::result::Result<Json<Note>, ApiError> {
    tracing::debug!(id, "get note");
    let note = observe(&state, "get", state.service().get_note_by_id(id).await)?;
    Ok(Json(note))
}

pub async fn add_note(
    State(state): State<AppState>,
    Json(note): Json<Note>,
) -> std::result::Result<Json<Note>, ApiError> {
    state.metrics().create_note.inc();
    let note = observe(&state, "create", state.service().create_note(note).await)?;
    tracing::debug!(id = ?note.id, "add note");
    Ok(Json(note))
}

pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<NoteId>,
    Json(note): Json<Note>,
) -> std::result::Result<Json<Note>, ApiError> {
    tracing::debug!(id, "update note");
    let note = observe(&state, "update", state.service().update_note(id, note).await)?;
    Ok(Json(note))
}

pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<NoteId>,
) -> std::result::Result<StatusCode, ApiError> {
    tracing::debug!(id, "delete note");
    observe(&state, "delete", state.service().remove_note(id).await)?;
    Ok(StatusCode::OK)
}

/// Count and log a failed service call, then hand the result back unchanged.
fn observe<T>(state: &AppState, op: &str, res: Result<T>) -> Result<T> {
    if let Err(e) = &res {
        let code = e.client_code().as_str();
        state.metrics().service_errors.inc(&[("op", op), ("code", code)]);
        tracing::warn!(op, code, error = %e, "note service call failed");
    }
    res
}
