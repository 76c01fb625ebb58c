//! Integration tests for the HTTP client against a local axum server that
//! serves the narrative REST routes from an in-memory backend.

use super::test_utils::{stored_narrative, InMemoryBackend};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;
use weaver::client::{FileInfo, HttpNarrativeClient, NarrativeApi};
use weaver::error::ApiError;
use weaver::narrative::{Narrative, NarrativeBuilder, SaveMode};

type Backend = Arc<InMemoryBackend>;
type HandlerError = (StatusCode, String);

fn to_status(error: ApiError) -> HandlerError {
    match error {
        ApiError::NarrativeNotFound(_) => (StatusCode::NOT_FOUND, "Narrative not found".to_string()),
        other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    }
}

async fn files(State(backend): State<Backend>) -> Result<Json<Vec<FileInfo>>, HandlerError> {
    backend.fetch_files().await.map(Json).map_err(to_status)
}

async fn list(State(backend): State<Backend>) -> Result<Json<Vec<Narrative>>, HandlerError> {
    backend.list_narratives().await.map(Json).map_err(to_status)
}

async fn create(
    State(backend): State<Backend>,
    Json(narrative): Json<Narrative>,
) -> Result<Json<Narrative>, HandlerError> {
    backend
        .create_narrative(&narrative)
        .await
        .map(Json)
        .map_err(to_status)
}

async fn get_one(
    State(backend): State<Backend>,
    Path(id): Path<Uuid>,
) -> Result<Json<Narrative>, HandlerError> {
    backend.get_narrative(id).await.map(Json).map_err(to_status)
}

async fn update(
    State(backend): State<Backend>,
    Path(id): Path<Uuid>,
    Json(narrative): Json<Narrative>,
) -> Result<Json<Narrative>, HandlerError> {
    backend
        .update_narrative(id, &narrative)
        .await
        .map(Json)
        .map_err(to_status)
}

async fn remove(
    State(backend): State<Backend>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, HandlerError> {
    backend.delete_narrative(id).await.map_err(to_status)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn resolve(
    State(backend): State<Backend>,
    Path(id): Path<Uuid>,
) -> Result<String, HandlerError> {
    backend.resolve_narrative(id).await.map_err(to_status)
}

fn narrative_routes(backend: Backend) -> Router {
    Router::new()
        .route("/api/files", get(files))
        .route("/api/narratives", get(list).post(create))
        .route(
            "/api/narratives/:id",
            get(get_one).put(update).delete(remove),
        )
        .route("/api/narratives/:id/resolve", get(resolve))
        .with_state(backend)
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn client_for(base_url: &str) -> HttpNarrativeClient {
    HttpNarrativeClient::new(base_url, Duration::from_secs(2), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_fetch_files() {
    let backend = Arc::new(InMemoryBackend::with_files(&["chapters/01.md", "notes.md"]));
    let client = client_for(&serve(narrative_routes(backend)).await);

    let files = client.fetch_files().await.unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0].path, "chapters/01.md");
    assert!(!files[0].is_directory);
}

#[tokio::test]
async fn test_save_list_get_resolve_delete() {
    let backend = Arc::new(InMemoryBackend::default());
    let client = client_for(&serve(narrative_routes(backend.clone())).await);

    let mut builder = NarrativeBuilder::new();
    builder.name = "Round trip".to_string();
    builder.add_file("b.md", Default::default());
    builder.add_file("a.md", Default::default());

    let created = builder.save(&client, SaveMode::Save).await.unwrap();
    assert!(created.is_persisted());
    assert_eq!(backend.stored().len(), 1);

    let listed = client.list_narratives().await.unwrap();
    assert_eq!(listed, vec![created.clone()]);

    let fetched = client.get_narrative(created.id).await.unwrap();
    assert_eq!(fetched.name, "Round trip");

    let text = client.resolve_narrative(created.id).await.unwrap();
    assert_eq!(text, "== b.md ==\n== a.md ==");

    client.delete_narrative(created.id).await.unwrap();
    assert!(backend.stored().is_empty());
}

#[tokio::test]
async fn test_update_by_identity() {
    let backend = Arc::new(InMemoryBackend::default());
    let existing = stored_narrative("Before", &["x.md"], false);
    backend.insert(existing.clone());
    let client = client_for(&serve(narrative_routes(backend.clone())).await);

    let mut builder = NarrativeBuilder::new();
    builder.edit(&existing);
    builder.name = "After".to_string();
    let updated = builder.save(&client, SaveMode::Save).await.unwrap();

    assert_eq!(updated.id, existing.id);
    assert_eq!(backend.stored()[0].name, "After");
}

#[tokio::test]
async fn test_missing_narrative_maps_to_not_found() {
    let backend = Arc::new(InMemoryBackend::default());
    let client = client_for(&serve(narrative_routes(backend)).await);

    let id = Uuid::new_v4();
    let err = client.get_narrative(id).await.unwrap_err();
    assert!(matches!(err, ApiError::NarrativeNotFound(missing) if missing == id));

    let err = client.delete_narrative(id).await.unwrap_err();
    assert!(matches!(err, ApiError::NarrativeNotFound(_)));
}

#[tokio::test]
async fn test_server_error_keeps_builder_intact() {
    let backend = Arc::new(InMemoryBackend::default());
    backend.set_reject_writes(true);
    let client = client_for(&serve(narrative_routes(backend)).await);

    let mut builder = NarrativeBuilder::new();
    builder.name = "Unlucky".to_string();
    builder.add_file("a.md", Default::default());
    let before = builder.clone();

    let err = builder.save(&client, SaveMode::Save).await.unwrap_err();
    match err {
        ApiError::RequestFailed(msg) => {
            assert!(msg.contains("500"));
            assert!(msg.contains("storage unavailable"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(builder, before);
}

#[tokio::test]
async fn test_malformed_body_maps_to_invalid_response() {
    let router = Router::new().route("/api/files", get(|| async { "not json" }));
    let client = client_for(&serve(router).await);

    let err = client.fetch_files().await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidResponse(_)));
}
