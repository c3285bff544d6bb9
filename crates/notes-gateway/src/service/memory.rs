use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use notes_core::error::{NotesError, Result};
use notes_core::{Note, NoteId};

use crate::config::NotesSection;
use crate::service::NoteService;

/// In-process note store.
///
/// Ids come from a monotonic sequence starting at 1 and are never reused,
/// even after the note holding one is removed.
pub struct InMemoryNoteService {
    notes: DashMap<NoteId, Note>,
    seq: AtomicI64,
    max_note_bytes: usize,
}

impl Default for InMemoryNoteService {
    fn default() -> Self {
        Self::new(&NotesSection::default())
    }
}

impl InMemoryNoteService {
    pub fn new(cfg: &NotesSection) -> Self {
        Self {
            notes: DashMap::new(),
            seq: AtomicI64::new(1),
            max_note_bytes: cfg.max_note_bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn validate(&self, note: &Note) -> Result<()> {
        if note.fields.is_empty() {
            return Err(NotesError::BadRequest("note must carry at least one field".into()));
        }
        let len = note.encoded_len()?;
        if len > self.max_note_bytes {
            return Err(NotesError::BadRequest(format!(
                "note is {len} bytes, limit is {}",
                self.max_note_bytes
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl NoteService for InMemoryNoteService {
    async fn get_all_notes(&self) -> Result<Vec<Note>> {
        let mut all: Vec<Note> = self.notes.iter().map(|e| e.value().clone()).collect();
        all.sort_by_key(|n| n.id);
        Ok(all)
    }

    async fn get_note_by_id(&self, id: NoteId) -> Result<Note> {
        self.notes
            .get(&id)
            .map(|e| e.value().clone())
            .ok_or(NotesError::NotFound(id))
    }

    async fn create_note(&self, note: Note) -> Result<Note> {
        self.validate(&note)?;
        let id = self.seq.fetch_add(1, Ordering::Relaxed);
        let note = note.with_id(id);
        self.notes.insert(id, note.clone());
        tracing::debug!(id, "note created");
        Ok(note)
    }

    async fn update_note(&self, id: NoteId, note: Note) -> Result<Note> {
        // existence is checked first: a missing id is NotFound whatever the body
        let mut slot = self.notes.get_mut(&id).ok_or(NotesError::NotFound(id))?;
        self.validate(&note)?;
        *slot = note.with_id(id);
        Ok(slot.clone())
    }

    async fn remove_note(&self, id: NoteId) -> Result<()> {
        self.notes
            .remove(&id)
            .map(|_| ())
            .ok_or(NotesError::NotFound(id))
    }
}
