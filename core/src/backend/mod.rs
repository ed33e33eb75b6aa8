//! Backend capability behind `NotesClient`.
//!
//! `StubBackend` answers in-process with synthesized data; `HttpBackend`
//! executes the REST contract against a live server. Callers only see
//! `NotesBackend`, so either can be swapped in without touching them.

mod remote;
mod stub;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::types::{Note, NoteDraft};

pub use remote::HttpBackend;
pub use stub::{StubBackend, WELCOME_CONTENT, WELCOME_ID, WELCOME_TITLE};

/// The four operations of the notes resource.
#[async_trait]
pub trait NotesBackend: Send + Sync {
    async fn list(&self) -> Result<Vec<Note>, ApiError>;
    async fn create(&self, draft: NoteDraft) -> Result<Note, ApiError>;
    async fn update(&self, note: Note) -> Result<Note, ApiError>;
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}
