//! Lightweight in-process metrics.
//!
//! Counters are stored as atomics, created once at startup and shared through
//! `AppState`. The `/metrics` handler renders them in Prometheus text format.

pub mod metrics;

pub use metrics::{Counter, CounterVec, NoteMetrics};
