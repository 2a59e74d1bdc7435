#![allow(dead_code)]

use std::future::Future;
use std::panic::AssertUnwindSafe;

use artcraft_api::router::build_app_router;
use artcraft_api::state::AppState;
use artcraft_db::Gateway;
use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use futures::FutureExt;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Connection string for a deployment that is never reachable. Server
/// selection gives up quickly so database-backed routes fail fast.
const OFFLINE_URI: &str = "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=200";

/// Build the full application router around `gateway`.
///
/// Uses [`build_app_router`] so integration tests exercise the same
/// middleware stack (CORS, request ID, tracing, panic recovery) that
/// production uses.
pub fn build_test_app(gateway: Gateway) -> Router {
    build_app_router(AppState { gateway })
}

/// App whose database is unreachable. Suitable for routes that must answer
/// without touching the database, and for asserting database-error mapping.
pub async fn offline_app() -> Router {
    let gateway = Gateway::connect(OFFLINE_URI, "artcraft_offline")
        .await
        .expect("offline URI must parse");
    build_test_app(gateway)
}

/// Run `test` against an app backed by a fresh, uniquely named database on
/// `MONGODB_TEST_URI`, then drop the database.
///
/// Callers are `#[ignore]`d tests; run them with
/// `MONGODB_TEST_URI=mongodb://localhost:27017 cargo test -- --ignored`.
/// Panics from `test` are re-raised after cleanup.
pub async fn with_live_app<F, Fut>(test: F)
where
    F: FnOnce(Router, Gateway) -> Fut,
    Fut: Future<Output = ()>,
{
    let uri = std::env::var("MONGODB_TEST_URI")
        .expect("MONGODB_TEST_URI must be set to run database tests");
    let name = format!("artcraft_api_test_{}", uuid::Uuid::new_v4().simple());
    let gateway = Gateway::connect(&uri, &name)
        .await
        .expect("MONGODB_TEST_URI must be a valid connection string");

    let app = build_test_app(gateway.clone());
    let outcome = AssertUnwindSafe(test(app, gateway.clone()))
        .catch_unwind()
        .await;

    gateway
        .database()
        .drop()
        .await
        .expect("Failed to drop test database");
    gateway.shutdown().await;

    if let Err(panic) = outcome {
        std::panic::resume_unwind(panic);
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: &Router, uri: &str, body: Value) -> Response {
    send_json(app, Method::PUT, uri, body).await
}

async fn send_json(app: &Router, method: Method, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}
