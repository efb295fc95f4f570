//! Integration test for the health endpoint.

mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_health_reports_ok_with_service_and_version() {
    let app = common::build_test_app();

    let (status, json) = common::get_json(&app, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "threadline-api");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}
