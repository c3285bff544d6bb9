//! Note entity.
//!
//! A note is an integer id plus an opaque JSON object. Only the id is
//! interpreted here; every other member is carried through untouched so the
//! schema stays owned by whoever stores the notes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Service-assigned note identifier.
pub type NoteId = i64;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Note {
    /// `None` until the note has been persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<NoteId>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Note {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { id: None, fields }
    }

    /// Same fields under a different id.
    pub fn with_id(self, id: NoteId) -> Self {
        Self {
            id: Some(id),
            fields: self.fields,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Size of the note in its JSON wire form.
    pub fn encoded_len(&self) -> crate::Result<usize> {
        serde_json::to_vec(self)
            .map(|v| v.len())
            .map_err(|e| crate::NotesError::Internal(format!("encode note failed: {e}")))
    }
}
