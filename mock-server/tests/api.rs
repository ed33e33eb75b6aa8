use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with_notes, welcome_note, Note};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

// --- list ---

#[tokio::test]
async fn list_notes_empty() {
    let resp = app().oneshot(empty_request("GET", "/notes")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let notes: Vec<Note> = body_json(resp).await;
    assert!(notes.is_empty());
}

#[tokio::test]
async fn list_notes_seeded_with_welcome_note() {
    let resp = app_with_notes(vec![welcome_note()])
        .oneshot(empty_request("GET", "/notes"))
        .await
        .unwrap();

    let notes: Vec<Note> = body_json(resp).await;
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].id, "1");
    assert_eq!(notes[0].title, "Welcome Note");
}

// --- create ---

#[tokio::test]
async fn create_note_returns_201() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/notes",
            r#"{"title":"Groceries","content":"milk"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let note: Note = body_json(resp).await;
    assert_eq!(note.title, "Groceries");
    assert_eq!(note.content, "milk");
    assert!(!note.id.is_empty());
    assert!(!note.updated_at.is_empty());
}

#[tokio::test]
async fn create_note_malformed_json_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/notes", r#"{"not_title":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- update ---

#[tokio::test]
async fn update_note_not_found() {
    let resp = app()
        .oneshot(json_request(
            "PUT",
            "/notes/missing",
            r#"{"id":"missing","title":"Nope","content":"","updatedAt":""}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- delete ---

#[tokio::test]
async fn delete_note_not_found() {
    let resp = app()
        .oneshot(empty_request("DELETE", "/notes/missing"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = app_with_notes(vec![welcome_note()]).into_service();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/notes",
            r#"{"title":"Walk dog","content":"at 6pm"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Note = body_json(resp).await;
    let id = created.id.clone();

    // list keeps insertion order
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/notes"))
        .await
        .unwrap();
    let notes: Vec<Note> = body_json(resp).await;
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].id, "1");
    assert_eq!(notes[1], created);

    // update: body id is ignored, path id wins
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            &format!("/notes/{id}"),
            r#"{"id":"ignored","title":"Walk cat","content":"at 7pm","updatedAt":"2000-01-01T00:00:00.000Z"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Note = body_json(resp).await;
    assert_eq!(updated.id, id);
    assert_eq!(updated.title, "Walk cat");
    assert_eq!(updated.content, "at 7pm");
    assert!(updated.updated_at >= created.updated_at);

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", &format!("/notes/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());

    // delete again: 404
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", &format!("/notes/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // list after delete: only the welcome note remains
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/notes"))
        .await
        .unwrap();
    let notes: Vec<Note> = body_json(resp).await;
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].id, "1");
}
