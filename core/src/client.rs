//! `NotesClient`: the facade callers use for the four note operations.

use std::sync::Arc;

use log::{debug, warn};

use crate::backend::{HttpBackend, NotesBackend, StubBackend};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::types::{Note, NoteDraft};

/// Forwards list/create/update/delete to a `NotesBackend`.
///
/// Cloning is cheap and clones share the backend. Each call is independent;
/// nothing is cached between calls.
#[derive(Clone)]
pub struct NotesClient {
    backend: Arc<dyn NotesBackend>,
}

impl NotesClient {
    pub fn new(backend: impl NotesBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Empty `api_base_url` selects `StubBackend`, anything else `HttpBackend`.
    pub fn from_config(config: &ClientConfig) -> Self {
        if config.uses_stub() {
            debug!("no API base URL configured, using stub backend");
            Self::new(StubBackend::new())
        } else {
            debug!("using HTTP backend at {}", config.api_base_url);
            Self::new(HttpBackend::new(config.api_base_url.trim()))
        }
    }

    pub async fn list(&self) -> Result<Vec<Note>, ApiError> {
        debug!("list notes");
        let notes = self
            .backend
            .list()
            .await
            .inspect_err(|e| warn!("list notes failed: {e}"))?;
        debug!("listed {} notes", notes.len());
        Ok(notes)
    }

    pub async fn create(&self, draft: NoteDraft) -> Result<Note, ApiError> {
        debug!("create note");
        let note = self
            .backend
            .create(draft)
            .await
            .inspect_err(|e| warn!("create note failed: {e}"))?;
        debug!("created note id={}", note.id);
        Ok(note)
    }

    pub async fn update(&self, note: Note) -> Result<Note, ApiError> {
        let id = note.id.clone();
        debug!("update note id={id}");
        self.backend
            .update(note)
            .await
            .inspect_err(|e| warn!("update note id={id} failed: {e}"))
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        debug!("delete note id={id}");
        self.backend
            .delete(id)
            .await
            .inspect_err(|e| warn!("delete note id={id} failed: {e}"))
    }
}

impl std::fmt::Debug for NotesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotesClient").finish_non_exhaustive()
    }
}
