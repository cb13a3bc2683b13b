mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{body_json, TestApp};
use tower::ServiceExt;

async fn create_event(app: &TestApp, token: &str, payload: serde_json::Value) -> axum::http::Response<Body> {
    app.router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/events")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::COOKIE, format!("session_token={token}"))
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn create_and_list_events() {
    let app = TestApp::new().await;
    let token = app.signup_admin("boss@admin.com", "secret123").await;

    let response = create_event(
        &app,
        &token,
        serde_json::json!({
            "name": "Hackathon 2025",
            "description": "Annual hackathon",
            "start_date": "2025-03-01",
            "end_date": "2025-03-02"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["name"], "Hackathon 2025");
    assert!(created["id"].as_str().is_some());

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/events")
                .header(header::COOKIE, format!("session_token={token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let events = body_json(response).await;
    assert_eq!(events.as_array().unwrap().len(), 1);
    assert_eq!(events[0]["name"], "Hackathon 2025");
}

#[tokio::test]
async fn event_name_is_required() {
    let app = TestApp::new().await;
    let token = app.signup_admin("boss@admin.com", "secret123").await;

    let response = create_event(
        &app,
        &token,
        serde_json::json!({
            "name": "   ",
            "start_date": "2025-03-01",
            "end_date": "2025-03-02"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Event name is required");
}

#[tokio::test]
async fn event_dates_must_be_ordered() {
    let app = TestApp::new().await;
    let token = app.signup_admin("boss@admin.com", "secret123").await;

    let response = create_event(
        &app,
        &token,
        serde_json::json!({
            "name": "Backwards",
            "start_date": "2025-03-02",
            "end_date": "2025-03-01"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
