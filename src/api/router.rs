use axum::{
    body::Body,
    extract::Request,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{auth, certificate, event, health, participant, search};
use tower_http::{
    classify::ServerErrorsFailureClass,
    trace::TraceLayer,
};
use tower_cookies::CookieManagerLayer;
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/api/v1/auth/signup", post(auth::signup))
        .route("/api/v1/auth/signin", post(auth::signin))
        .route("/api/v1/auth/signout", post(auth::signout))
        .route("/api/v1/auth/session", get(auth::session))

        // Events (admin)
        .route("/api/v1/events", post(event::create_event).get(event::list_events))

        // Participants (admin)
        .route("/api/v1/participants", get(participant::list_participants))
        .route("/api/v1/participants/import/preview", post(participant::preview_roster))
        .route("/api/v1/participants/import", post(participant::import_roster))

        // Certificates (admin)
        .route("/api/v1/certificates", post(certificate::generate_certificate).get(certificate::list_certificates))
        .route("/api/v1/certificates/preview", post(certificate::preview_certificate))

        // Public lookup
        .route("/api/v1/certificates/search", get(search::search_certificates))
        .route("/api/v1/certificates/{certificate_number}/download", get(certificate::download_certificate))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
