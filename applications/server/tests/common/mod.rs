/// Common test utilities and fixtures
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use mixtape_core::PlaylistStore;
use mixtape_server::{create_router, AppState};
use serde_json::Value;
use tower::util::ServiceExt;

/// Router over a fresh, empty store
pub fn create_test_app(strict_status: bool) -> Router {
    create_test_app_with(PlaylistStore::new(), strict_status)
}

/// Router over a prepared store
pub fn create_test_app_with(store: PlaylistStore, strict_status: bool) -> Router {
    create_router(AppState::new(store, strict_status))
}

/// Send one request and decode the JSON response body
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
    };

    (status, value)
}

/// Send a raw body with an optional content type, returning the status
pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> StatusCode {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }

    let request = builder.body(Body::from(body.to_string())).unwrap();
    app.clone().oneshot(request).await.unwrap().status()
}

/// Test song payloads
pub mod fixtures {
    use serde_json::{json, Value};

    pub fn song(title: &str, artist: &str, genre: &str) -> Value {
        json!({ "title": title, "artist": artist, "genre": genre })
    }

    pub fn titles(playlist: &Value) -> Vec<String> {
        playlist["songs"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["title"].as_str().unwrap().to_string())
            .collect()
    }
}
