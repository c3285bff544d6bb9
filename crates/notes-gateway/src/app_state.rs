//! Shared application state for the notes gateway.
//!
//! Holds the note service handle and the metrics registry. Both are built once
//! at startup and cloned cheaply into every handler.

use std::sync::Arc;

use notes_core::error::Result;

use crate::config::GatewayConfig;
use crate::obs::NoteMetrics;
use crate::service::{InMemoryNoteService, NoteService};

#[derive(Clone)]
pub struct AppState {
    service: Arc<dyn NoteService>,
    metrics: Arc<NoteMetrics>,
}

impl AppState {
    /// Build application state backed by the in-memory note service.
    pub fn new(cfg: &GatewayConfig) -> Result<Self> {
        cfg.validate()?;
        let service = Arc::new(InMemoryNoteService::new(&cfg.notes));
        Ok(Self::with_service(service))
    }

    /// Build application state around an existing note service.
    pub fn with_service(service: Arc<dyn NoteService>) -> Self {
        Self {
            service,
            metrics: Arc::new(NoteMetrics::new()),
        }
    }

    pub fn service(&self) -> &dyn NoteService {
        self.service.as_ref()
    }

    pub fn metrics(&self) -> Arc<NoteMetrics> {
        Arc::clone(&self.metrics)
    }
}
