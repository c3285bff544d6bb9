//! Axum route table.
//!
//! Notes live at the root: `/` for the collection, `/:id` for a single note.
//! Static operational routes take precedence over the `/:id` capture.

use axum::{routing::get, Router};

use crate::{api::notes, app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(notes::all_notes).post(notes::add_note))
        .route(
            "/:id",
            get(notes::get_note)
                .put(notes::update_note)
                .delete(notes::delete_note),
        )
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
