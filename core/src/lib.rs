//! Asynchronous data-access layer for the notes service.
//!
//! # Overview
//! `NotesClient` exposes list, create, update and delete over `Note`. It
//! forwards to a `NotesBackend`: `StubBackend` synthesizes results in-process,
//! `HttpBackend` talks to the REST API at a configured base URL.
//!
//! # Design
//! - Configuration is passed in explicitly through `ClientConfig`.
//! - `NotesApi` builds `HttpRequest` values and parses `HttpResponse` values
//!   without touching the network; `HttpBackend` alone does I/O.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod backend;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod timestamp;
pub mod types;

pub use api::NotesApi;
pub use backend::{HttpBackend, NotesBackend, StubBackend};
pub use client::NotesClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Note, NoteDraft};
