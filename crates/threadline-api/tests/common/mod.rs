//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use threadline_api::state::AppState;
use threadline_test_support::{
    FixedClock, InMemoryOrders, InMemoryProducts, InMemoryUsers, RecordingSender,
};
use tower::ServiceExt;
use uuid::Uuid;

/// The full application over in-memory collaborators, with handles kept so
/// tests can seed data and inspect persisted state directly.
pub struct TestApp {
    state: AppState,
    pub users: Arc<InMemoryUsers>,
    pub products: Arc<InMemoryProducts>,
    pub orders: Arc<InMemoryOrders>,
    pub sender: Arc<RecordingSender>,
}

impl TestApp {
    /// Build a fresh router sharing this app's state.
    pub fn router(&self) -> Router {
        threadline_api::app::router(self.state.clone())
    }
}

/// Build the full app router with in-memory repositories and a fixed clock.
/// Uses the same route structure as `main.rs`.
pub fn build_test_app() -> TestApp {
    let users = Arc::new(InMemoryUsers::new());
    let products = Arc::new(InMemoryProducts::new());
    let orders = Arc::new(InMemoryOrders::new());
    let sender = Arc::new(RecordingSender::new());
    let state = AppState::new(
        users.clone(),
        products.clone(),
        orders.clone(),
        Arc::new(FixedClock::default_instant()),
        sender.clone(),
    );
    TestApp {
        state,
        users,
        products,
        orders,
        sender,
    }
}

async fn dispatch(app: &TestApp, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.router().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn builder(method: &str, uri: &str, user: Option<Uuid>) -> axum::http::request::Builder {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user) = user {
        builder = builder.header("x-user-id", user.to_string());
    }
    builder
}

/// Send a GET request and return the response.
pub async fn get_json(
    app: &TestApp,
    uri: &str,
    user: Option<Uuid>,
) -> (StatusCode, serde_json::Value) {
    let request = builder("GET", uri, user).body(Body::empty()).unwrap();
    dispatch(app, request).await
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: &TestApp,
    uri: &str,
    user: Option<Uuid>,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = builder("POST", uri, user)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();
    dispatch(app, request).await
}

/// Send a POST request with no body and return the response.
pub async fn post_empty(
    app: &TestApp,
    uri: &str,
    user: Option<Uuid>,
) -> (StatusCode, serde_json::Value) {
    let request = builder("POST", uri, user).body(Body::empty()).unwrap();
    dispatch(app, request).await
}

/// Send a PUT request with a JSON body and return the response.
pub async fn put_json(
    app: &TestApp,
    uri: &str,
    user: Option<Uuid>,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = builder("PUT", uri, user)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();
    dispatch(app, request).await
}

/// Send a DELETE request and return the response.
pub async fn delete_json(
    app: &TestApp,
    uri: &str,
    user: Option<Uuid>,
) -> (StatusCode, serde_json::Value) {
    let request = builder("DELETE", uri, user).body(Body::empty()).unwrap();
    dispatch(app, request).await
}
