//! Note service seam.
//!
//! The HTTP layer only talks to `dyn NoteService`; persistence, id assignment
//! and validation live behind it.

pub mod memory;

use async_trait::async_trait;

use notes_core::error::Result;
use notes_core::{Note, NoteId};

pub use memory::InMemoryNoteService;

/// Persistence and business rules for notes.
#[async_trait]
pub trait NoteService: Send + Sync {
    /// All notes, ordered by ascending id.
    async fn get_all_notes(&self) -> Result<Vec<Note>>;

    async fn get_note_by_id(&self, id: NoteId) -> Result<Note>;

    /// Persist a new note. Any id carried by `note` is discarded.
    async fn create_note(&self, note: Note) -> Result<Note>;

    /// Replace the fields of note `id`. The stored id never changes.
    async fn update_note(&self, id: NoteId, note: Note) -> Result<Note>;

    async fn remove_note(&self, id: NoteId) -> Result<()>;
}
