//! Client configuration.
//!
//! The base URL is read once at startup and handed to
//! `NotesClient::from_config`; library code never looks at the environment.

use std::env;

/// Environment variable consulted by `ClientConfig::from_env`.
pub const BASE_URL_ENV: &str = "NOTES_API_BASE_URL";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the notes REST API. Empty selects the in-process stub.
    pub api_base_url: String,
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
        }
    }

    /// Reads `NOTES_API_BASE_URL`; unset or non-UTF-8 yields an empty URL.
    pub fn from_env() -> Self {
        Self::new(env::var(BASE_URL_ENV).unwrap_or_default())
    }

    pub fn uses_stub(&self) -> bool {
        self.api_base_url.trim().is_empty()
    }
}
