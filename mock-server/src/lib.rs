//! In-memory notes server implementing the REST contract the client targets.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub updated_at: String,
}

#[derive(Deserialize)]
pub struct CreateNote {
    pub title: String,
    pub content: String,
}

/// Body of `PUT /notes/{id}`. `id` and `updatedAt` may be present but are
/// ignored: the path id wins and the timestamp is set by the server.
#[derive(Deserialize)]
pub struct UpdateNote {
    pub title: String,
    pub content: String,
}

/// Notes in insertion order.
pub type Db = Arc<RwLock<Vec<Note>>>;

pub fn welcome_note() -> Note {
    Note {
        id: "1".to_string(),
        title: "Welcome Note".to_string(),
        content: "This is your first note.".to_string(),
        updated_at: now(),
    }
}

pub fn app() -> Router {
    app_with_notes(Vec::new())
}

pub fn app_with_notes(notes: Vec<Note>) -> Router {
    let db: Db = Arc::new(RwLock::new(notes));
    Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route("/notes/{id}", put(update_note).delete(delete_note))
        .with_state(db)
}

pub async fn serve(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!("notes mock server listening on {addr}");
    }
    axum::serve(listener, router).await
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

async fn list_notes(State(db): State<Db>) -> Json<Vec<Note>> {
    Json(db.read().await.clone())
}

async fn create_note(
    State(db): State<Db>,
    Json(input): Json<CreateNote>,
) -> (StatusCode, Json<Note>) {
    let note = Note {
        id: Uuid::new_v4().to_string(),
        title: input.title,
        content: input.content,
        updated_at: now(),
    };
    debug!("created note id={}", note.id);
    db.write().await.push(note.clone());
    (StatusCode::CREATED, Json(note))
}

async fn update_note(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<UpdateNote>,
) -> Result<Json<Note>, StatusCode> {
    let mut notes = db.write().await;
    let note = notes
        .iter_mut()
        .find(|n| n.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    note.title = input.title;
    note.content = input.content;
    note.updated_at = now();
    debug!("updated note id={id}");
    Ok(Json(note.clone()))
}

async fn delete_note(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let mut notes = db.write().await;
    let index = notes
        .iter()
        .position(|n| n.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    notes.remove(index);
    debug!("deleted note id={id}");
    Ok(StatusCode::NO_CONTENT)
}
