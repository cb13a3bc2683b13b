mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{body_json, TestApp};
use tower::ServiceExt;

async fn setup_event(app: &TestApp, token: &str) -> String {
    let payload = serde_json::json!({
        "name": "Tech Summit",
        "start_date": "2025-05-10",
        "end_date": "2025-05-11"
    });
    let response = app
        .router
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
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_str().unwrap().to_string()
}

async fn post_csv(
    app: &TestApp,
    token: &str,
    path: &str,
    csv: &str,
) -> axum::http::Response<Body> {
    app.router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "text/csv")
                .header(header::COOKIE, format!("session_token={token}"))
                .body(Body::from(csv.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn preview_reports_per_row_validity() {
    let app = TestApp::new().await;
    let token = app.signup_admin("boss@admin.com", "secret123").await;

    let csv = "email,fullname,organization\n\
               good@example.com,Ada Lovelace,Analytical\n\
               not-an-email,Charles Babbage,\n\
               ,Missing Email,Org\n";
    let response = post_csv(&app, &token, "/api/v1/participants/import/preview", csv).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["total"], 3);
    assert_eq!(body["invalid"], 2);
    assert_eq!(body["rows"][0]["status"], "valid");
    assert_eq!(body["rows"][1]["status"], "invalid");
    assert_eq!(body["rows"][1]["errors"][0], "Invalid email format");
    assert_eq!(body["rows"][2]["errors"][0], "Email is required");
}

#[tokio::test]
async fn upload_is_refused_while_any_row_is_invalid() {
    let app = TestApp::new().await;
    let token = app.signup_admin("boss@admin.com", "secret123").await;
    let event_id = setup_event(&app, &token).await;

    let csv = "email,fullname\n\
               good@example.com,Ada Lovelace\n\
               bad-row,Charles Babbage\n";
    let response = post_csv(
        &app,
        &token,
        &format!("/api/v1/participants/import?event_id={event_id}"),
        csv,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        "1 rows contain errors. Please fix them before uploading."
    );

    // Nothing was persisted.
    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/participants")
                .header(header::COOKIE, format!("session_token={token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let participants = body_json(response).await;
    assert_eq!(participants.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn import_upserts_and_normalizes_emails() {
    let app = TestApp::new().await;
    let token = app.signup_admin("boss@admin.com", "secret123").await;
    let event_id = setup_event(&app, &token).await;

    let csv = "email,fullname,organization\n\
               Ada@Example.com,Ada Lovelace,Analytical\n";
    let response = post_csv(
        &app,
        &token,
        &format!("/api/v1/participants/import?event_id={event_id}"),
        csv,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["imported"], 1);
    assert_eq!(body["participants"][0]["email"], "ada@example.com");

    // Re-upload with a new name: still one record, last write wins.
    let csv = "email,fullname,organization\n\
               ada@example.com,Ada King,Analytical\n";
    let response = post_csv(
        &app,
        &token,
        &format!("/api/v1/participants/import?event_id={event_id}"),
        csv,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/participants")
                .header(header::COOKIE, format!("session_token={token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let participants = body_json(response).await;
    assert_eq!(participants.as_array().unwrap().len(), 1);
    assert_eq!(participants[0]["full_name"], "Ada King");
}

#[tokio::test]
async fn duplicate_emails_in_one_batch_collapse_to_last() {
    let app = TestApp::new().await;
    let token = app.signup_admin("boss@admin.com", "secret123").await;
    let event_id = setup_event(&app, &token).await;

    let csv = "email,fullname\n\
               twin@example.com,First Value\n\
               TWIN@example.com,Second Value\n";
    let response = post_csv(
        &app,
        &token,
        &format!("/api/v1/participants/import?event_id={event_id}"),
        csv,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["imported"], 1);

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/participants")
                .header(header::COOKIE, format!("session_token={token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let participants = body_json(response).await;
    assert_eq!(participants.as_array().unwrap().len(), 1);
    assert_eq!(participants[0]["full_name"], "Second Value");
}

#[tokio::test]
async fn import_requires_an_event_id_somewhere() {
    let app = TestApp::new().await;
    let token = app.signup_admin("boss@admin.com", "secret123").await;

    let csv = "email,fullname\ngood@example.com,Ada Lovelace\n";
    let response = post_csv(&app, &token, "/api/v1/participants/import", csv).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        "Event ID is required. Either select an event or include an eventId column in your CSV."
    );
}

#[tokio::test]
async fn import_rejects_unknown_event() {
    let app = TestApp::new().await;
    let token = app.signup_admin("boss@admin.com", "secret123").await;

    let csv = "email,fullname\ngood@example.com,Ada Lovelace\n";
    let response = post_csv(
        &app,
        &token,
        "/api/v1/participants/import?event_id=no-such-event",
        csv,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn header_only_or_empty_file_is_rejected() {
    let app = TestApp::new().await;
    let token = app.signup_admin("boss@admin.com", "secret123").await;

    let response = post_csv(&app, &token, "/api/v1/participants/import/preview", "email,fullname").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        "CSV file must contain a header row and at least one data row"
    );
}

#[tokio::test]
async fn missing_required_headers_are_named() {
    let app = TestApp::new().await;
    let token = app.signup_admin("boss@admin.com", "secret123").await;

    let csv = "email,organization\ngood@example.com,Acme\n";
    let response = post_csv(&app, &token, "/api/v1/participants/import/preview", csv).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Missing required headers: fullname");
}
