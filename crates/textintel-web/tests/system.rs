use std::io::Write;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use textintel_core::{AnalysisInput, AnalysisOptions, TextIntelResult, TextIntelligenceProvider};
use textintel_web::{create_router, state::AppState};
use tower::ServiceExt;

struct UnusedProvider;

#[async_trait]
impl TextIntelligenceProvider for UnusedProvider {
    async fn analyze(&self, _input: &AnalysisInput, _options: &AnalysisOptions) -> TextIntelResult<Value> {
        panic!("system routes must not call the provider");
    }
}

fn app(metadata_path: &std::path::Path) -> Router {
    create_router(AppState::new(Arc::new(UnusedProvider), metadata_path), 8080)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn test_health() {
    let dir = tempfile::tempdir().unwrap();
    let (status, body) = get(app(&dir.path().join("deepgram.toml")), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok", "service": "text-intelligence"}));
}

#[tokio::test]
async fn test_metadata_returns_meta_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deepgram.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(
        file,
        "[meta]\ntitle = \"Text Intelligence\"\nuseCase = \"text-intelligence\"\n\n[build]\ncommand = \"make\""
    )
    .unwrap();

    let (status, body) = get(app(&path), "/api/metadata").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"title": "Text Intelligence", "useCase": "text-intelligence"})
    );
}

#[tokio::test]
async fn test_metadata_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let (status, body) = get(app(&dir.path().join("deepgram.toml")), "/api/metadata").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "INTERNAL_SERVER_ERROR");
    assert_eq!(body["message"], "deepgram.toml file not found");
}

#[tokio::test]
async fn test_metadata_missing_section() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deepgram.toml");
    std::fs::write(&path, "[build]\ncommand = \"make\"\n").unwrap();

    let (status, body) = get(app(&path), "/api/metadata").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Missing [meta] section in deepgram.toml");
}

#[tokio::test]
async fn test_cors_allows_frontend_origin() {
    let dir = tempfile::tempdir().unwrap();
    let response = app(&dir.path().join("deepgram.toml"))
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, "http://localhost:8080")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:8080"
    );
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .unwrap(),
        "true"
    );
}

#[tokio::test]
async fn test_cors_ignores_other_origins() {
    let dir = tempfile::tempdir().unwrap();
    let response = app(&dir.path().join("deepgram.toml"))
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, "http://evil.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
