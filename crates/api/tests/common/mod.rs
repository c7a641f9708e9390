#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use palette_api::config::{Environment, ServerConfig, StorageBackend};
use palette_api::router::build_app_router;
use palette_api::state::AppState;
use palette_db::seed::{self, SeedSummary};
use palette_db::{MemoryStorage, Storage};

/// Build a test `ServerConfig` with safe defaults and in-memory storage.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        environment: Environment::Test,
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".parse().unwrap()],
        request_timeout_secs: 30,
        storage: StorageBackend::Memory,
        seed_on_startup: false,
    }
}

/// Build the full application router over the given storage.
///
/// Uses the same builder as `main.rs`, so tests exercise the production
/// middleware stack.
pub fn build_test_app(storage: Arc<dyn Storage>) -> Router {
    build_app_router(AppState {
        storage,
        config: Arc::new(test_config()),
    })
}

/// A router over freshly seeded in-memory storage.
pub struct TestApp {
    pub router: Router,
    pub storage: Arc<MemoryStorage>,
    pub seed: SeedSummary,
}

impl TestApp {
    /// A clone of the router, ready for a single `oneshot` request.
    pub fn app(&self) -> Router {
        self.router.clone()
    }
}

/// Seed one project with two palettes (colors `#47850`..`#47854`).
pub async fn seeded_app() -> TestApp {
    let storage = Arc::new(MemoryStorage::new());
    let seed = seed::run(storage.as_ref()).await.unwrap();
    TestApp {
        router: build_test_app(storage.clone()),
        storage,
        seed,
    }
}

/// A router over empty in-memory storage.
pub fn empty_app() -> Router {
    build_test_app(Arc::new(MemoryStorage::new()))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn send_json(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PATCH, uri, body).await
}

/// Send a raw body, with an optional `Content-Type` header.
pub async fn send_raw(
    app: Router,
    method: Method,
    uri: &str,
    body: &'static str,
    content_type: Option<&str>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    send(app, builder.body(Body::from(body)).unwrap()).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}
