//! Stateless HTTP request builder and response parser for the notes API.
//!
//! # Design
//! `NotesApi` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the HTTP round-trip in between.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, APPLICATION_JSON, CONTENT_TYPE};
use crate::types::{Note, NoteDraft};

/// Synchronous, stateless request builder for the notes REST resource.
#[derive(Debug, Clone)]
pub struct NotesApi {
    base_url: String,
}

impl NotesApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/notes", self.base_url)
    }

    fn note_url(&self, id: &str) -> String {
        format!("{}/notes/{}", self.base_url, urlencoding::encode(id))
    }

    pub fn build_list_notes(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.collection_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_note(&self, draft: &NoteDraft) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Post, self.collection_url(), draft)
    }

    pub fn build_update_note(&self, note: &Note) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Put, self.note_url(&note.id), note)
    }

    pub fn build_delete_note(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: self.note_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_notes(&self, response: HttpResponse) -> Result<Vec<Note>, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_create_note(&self, response: HttpResponse) -> Result<Note, ApiError> {
        check_status(&response, 201)?;
        decode(&response.body)
    }

    pub fn parse_update_note(&self, response: HttpResponse) -> Result<Note, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_delete_note(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)?;
        Ok(())
    }
}

fn json_request<T: Serialize>(
    method: HttpMethod,
    url: String,
    payload: &T,
) -> Result<HttpRequest, ApiError> {
    let body = serde_json::to_string(payload).map_err(|e| ApiError::Serialization(e.to_string()))?;
    Ok(HttpRequest {
        method,
        url,
        headers: vec![(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string())],
        body: Some(body),
    })
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
