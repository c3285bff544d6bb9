//! Shared error type across notes crates.

use thiserror::Error;

use crate::model::NoteId;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / note rejected by validation.
    BadRequest,
    /// No note with the requested id.
    NotFound,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses and metric labels.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, NotesError>;

/// Unified error type used by core, the note service and the gateway.
#[derive(Debug, Error)]
pub enum NotesError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("note not found: {0}")]
    NotFound(NoteId),
    #[error("internal: {0}")]
    Internal(String),
}

impl NotesError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            NotesError::BadRequest(_) => ClientCode::BadRequest,
            NotesError::NotFound(_) => ClientCode::NotFound,
            NotesError::Internal(_) => ClientCode::Internal,
        }
    }
}
