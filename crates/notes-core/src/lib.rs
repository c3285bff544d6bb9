//! notes core: the note data model and the error surface shared by the
//! gateway, the note service, and any embedding binary.
//!
//! This crate carries no transport or runtime dependencies so it can be reused
//! by alternate front-ends and storage backends.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `NotesError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod model;

/// Shared result type.
pub use error::{Result, NotesError};
pub use model::{Note, NoteId};
