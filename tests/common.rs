use certificate_backend::{
    api::router::create_router,
    config::Config,
    domain::services::auth_service::AuthService,
    infra::repositories::{
        sqlite_certificate_repo::SqliteCertificateRepo, sqlite_event_repo::SqliteEventRepo,
        sqlite_participant_repo::SqliteParticipantRepo, sqlite_session_repo::SqliteSessionRepo,
        sqlite_user_repo::SqliteUserRepo,
    },
    state::AppState,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            admin_email_domain: "@admin.com".to_string(),
            certificate_prefix: "TEKRON".to_string(),
        };

        let user_repo = Arc::new(SqliteUserRepo::new(pool.clone()));
        let session_repo = Arc::new(SqliteSessionRepo::new(pool.clone()));
        let auth_service = Arc::new(AuthService::new(
            user_repo.clone(),
            session_repo.clone(),
            config.clone(),
        ));

        let state = Arc::new(AppState {
            config: config.clone(),
            event_repo: Arc::new(SqliteEventRepo::new(pool.clone())),
            participant_repo: Arc::new(SqliteParticipantRepo::new(pool.clone())),
            certificate_repo: Arc::new(SqliteCertificateRepo::new(pool.clone())),
            user_repo,
            session_repo,
            auth_service,
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    /// Registers a fresh admin account and returns its raw session token.
    #[allow(dead_code)]
    pub async fn signup_admin(&self, email: &str, password: &str) -> String {
        let payload = serde_json::json!({ "email": email, "password": password });

        let response = self
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

        if !response.status().is_success() {
            panic!("Signup failed in test helper: status {}", response.status());
        }

        extract_session_token(
            response
                .headers()
                .get_all(header::SET_COOKIE)
                .iter()
                .map(|h| h.to_str().unwrap().to_string())
                .collect(),
        )
    }
}

#[allow(dead_code)]
pub fn extract_session_token(cookies: Vec<String>) -> String {
    let session_cookie = cookies
        .iter()
        .find(|c| c.contains("session_token="))
        .expect("No session_token cookie returned");

    let start = session_cookie.find("session_token=").unwrap() + "session_token=".len();
    let end = session_cookie[start..]
        .find(';')
        .unwrap_or(session_cookie.len() - start);
    session_cookie[start..start + end].to_string()
}

#[allow(dead_code)]
pub async fn body_json(response: axum::http::Response<Body>) -> Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

#[allow(dead_code)]
pub async fn body_bytes(response: axum::http::Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
