mod common;

use axum::Router;
use axum::routing::get;
use axum_test::TestServer;
use routines_manager::api::handlers::health_handler;
use serde_json::Value;

#[tokio::test]
async fn test_health_reports_status_and_version() {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(common::create_test_state());
    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
