mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use certificate_backend::domain::models::session::SessionRecord;
use certificate_backend::domain::models::user::AdminUser;
use certificate_backend::domain::ports::{AdminUserRepository, SessionRepository};
use common::{body_json, TestApp};
use tower::ServiceExt;

#[tokio::test]
async fn signup_rejects_non_admin_domain() {
    let app = TestApp::new().await;

    let payload = serde_json::json!({ "email": "alice@gmail.com", "password": "secret123" });
    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/auth/signup")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let cookies: Vec<_> = response.headers().get_all(header::SET_COOKIE).iter().collect();
    assert!(cookies.is_empty(), "no session may be issued on rejected signup");

    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        "Only @admin.com email addresses are allowed for registration"
    );
}

#[tokio::test]
async fn signup_issues_session_and_introspects() {
    let app = TestApp::new().await;
    let token = app.signup_admin("boss@admin.com", "secret123").await;

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/auth/session")
                .header(header::COOKIE, format!("session_token={token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["authenticated"], true);
    assert_eq!(body["user"]["email"], "boss@admin.com");
    assert_eq!(body["user"]["is_admin"], true);
}

#[tokio::test]
async fn duplicate_signup_conflicts() {
    let app = TestApp::new().await;
    app.signup_admin("boss@admin.com", "secret123").await;

    let payload = serde_json::json!({ "email": "boss@admin.com", "password": "other456" });
    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/auth/signup")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn signin_with_wrong_password_is_unauthorized() {
    let app = TestApp::new().await;
    app.signup_admin("boss@admin.com", "secret123").await;

    let payload = serde_json::json!({ "email": "boss@admin.com", "password": "wrong" });
    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/auth/signin")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn non_admin_credentials_get_access_denied_and_no_session() {
    let app = TestApp::new().await;

    // Seed a user that bypassed the signup domain gate.
    let salt = argon2::password_hash::SaltString::generate(
        &mut argon2::password_hash::rand_core::OsRng,
    );
    let hash = argon2::PasswordHasher::hash_password(
        &argon2::Argon2::default(),
        b"secret123",
        &salt,
    )
    .unwrap()
    .to_string();
    app.state
        .user_repo
        .create(&AdminUser::new("intruder@gmail.com".to_string(), hash))
        .await
        .unwrap();

    let payload = serde_json::json!({ "email": "intruder@gmail.com", "password": "secret123" });
    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/auth/signin")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let cookies: Vec<_> = response.headers().get_all(header::SET_COOKIE).iter().collect();
    assert!(cookies.is_empty());

    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        "Access denied. You need administrator privileges to access this area."
    );
}

#[tokio::test]
async fn signout_invalidates_session() {
    let app = TestApp::new().await;
    let token = app.signup_admin("boss@admin.com", "secret123").await;

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/auth/signout")
                .header(header::COOKIE, format!("session_token={token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/auth/session")
                .header(header::COOKIE, format!("session_token={token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["authenticated"], false);
}

#[tokio::test]
async fn expired_sessions_are_rejected_and_reaped() {
    let app = TestApp::new().await;
    app.signup_admin("boss@admin.com", "secret123").await;

    let user = app
        .state
        .user_repo
        .find_by_email("boss@admin.com")
        .await
        .unwrap()
        .unwrap();

    let stale_token = "a".repeat(64);
    let token_hash = app.state.auth_service.hash_token(&stale_token);
    let now = chrono::Utc::now();
    app.state
        .session_repo
        .create(&SessionRecord {
            token_hash: token_hash.clone(),
            user_id: user.id,
            expires_at: now - chrono::Duration::hours(1),
            created_at: now - chrono::Duration::days(8),
        })
        .await
        .unwrap();

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/auth/session")
                .header(header::COOKIE, format!("session_token={stale_token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["authenticated"], false);

    // The stale record is deleted on first sight.
    let record = app
        .state
        .session_repo
        .find_by_token_hash(&token_hash)
        .await
        .unwrap();
    assert!(record.is_none());

    // Admin routes reject the same token outright.
    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/events")
                .header(header::COOKIE, format!("session_token={stale_token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_routes_require_a_session() {
    let app = TestApp::new().await;

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/events")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
