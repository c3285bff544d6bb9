//! Top-level facade crate for notes.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use notes_core::*;
}

pub mod gateway {
    pub use notes_gateway::*;
}
