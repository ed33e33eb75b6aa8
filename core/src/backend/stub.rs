use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use log::debug;

use super::NotesBackend;
use crate::error::ApiError;
use crate::timestamp;
use crate::types::{Note, NoteDraft};

pub const WELCOME_ID: &str = "1";
pub const WELCOME_TITLE: &str = "Welcome Note";
pub const WELCOME_CONTENT: &str = "This is your first note.";

/// In-process backend that synthesizes every result and stores nothing.
///
/// Ids are millisecond timestamps. If the clock has not advanced since the
/// last id was issued, the previous id plus one is used instead, so ids from
/// one instance are strictly increasing.
#[derive(Debug, Default)]
pub struct StubBackend {
    last_id: AtomicI64,
}

impl StubBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> String {
        let now = timestamp::now_millis();
        let mut last = self.last_id.load(Ordering::Acquire);
        loop {
            let candidate = now.max(last + 1);
            match self.last_id.compare_exchange_weak(
                last,
                candidate,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return candidate.to_string(),
                Err(actual) => last = actual,
            }
        }
    }
}

#[async_trait]
impl NotesBackend for StubBackend {
    async fn list(&self) -> Result<Vec<Note>, ApiError> {
        Ok(vec![Note {
            id: WELCOME_ID.to_string(),
            title: WELCOME_TITLE.to_string(),
            content: WELCOME_CONTENT.to_string(),
            updated_at: timestamp::now_iso8601(),
        }])
    }

    async fn create(&self, draft: NoteDraft) -> Result<Note, ApiError> {
        let id = self.next_id();
        debug!("stub: synthesized note id={id}");
        Ok(Note::from_draft(draft, id, timestamp::now_iso8601()))
    }

    async fn update(&self, note: Note) -> Result<Note, ApiError> {
        Ok(note.touched(timestamp::now_iso8601()))
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        debug!("stub: delete id={id:?} is a no-op");
        Ok(())
    }
}
