//! Domain DTOs for the notes API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates. The wire
//! form uses camelCase keys, so `updated_at` travels as `updatedAt`.

use serde::{Deserialize, Serialize};

/// A single note returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    /// ISO-8601 UTC timestamp of the last create or update.
    pub updated_at: String,
}

/// Request payload for creating a new note. The backend assigns `id` and
/// `updatedAt`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

impl Note {
    pub fn from_draft(draft: NoteDraft, id: String, updated_at: String) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
            updated_at,
        }
    }

    /// Returns the note with only `updated_at` replaced.
    pub fn touched(self, updated_at: String) -> Self {
        Self { updated_at, ..self }
    }
}
