use async_trait::async_trait;
use log::debug;

use super::NotesBackend;
use crate::api::NotesApi;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Note, NoteDraft};

/// Backend that runs `NotesApi` requests over HTTP with `reqwest`.
///
/// One request per operation. No retries and no timeout beyond reqwest's
/// defaults; transport failures come back as `ApiError::Transport`.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    api: NotesApi,
    http: reqwest::Client,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: &str, http: reqwest::Client) -> Self {
        Self {
            api: NotesApi::new(base_url),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        self.api.base_url()
    }

    async fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!("{} {}", req.method.as_str(), req.url);
        let mut builder = self.http.request(to_reqwest(req.method), &req.url);
        for (name, value) in &req.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        debug!("-> {status} ({} bytes)", body.len());

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn to_reqwest(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl NotesBackend for HttpBackend {
    async fn list(&self) -> Result<Vec<Note>, ApiError> {
        let response = self.execute(self.api.build_list_notes()).await?;
        self.api.parse_list_notes(response)
    }

    async fn create(&self, draft: NoteDraft) -> Result<Note, ApiError> {
        let request = self.api.build_create_note(&draft)?;
        let response = self.execute(request).await?;
        self.api.parse_create_note(response)
    }

    async fn update(&self, note: Note) -> Result<Note, ApiError> {
        let request = self.api.build_update_note(&note)?;
        let response = self.execute(request).await?;
        self.api.parse_update_note(response)
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let response = self.execute(self.api.build_delete_note(id)).await?;
        self.api.parse_delete_note(response)
    }
}
