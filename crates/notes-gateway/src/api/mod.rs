//! HTTP API for notes.

pub mod error;
pub mod notes;

pub use error::ApiError;
