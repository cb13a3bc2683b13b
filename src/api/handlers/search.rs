use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use crate::api::dtos::requests::SearchQuery;
use crate::api::dtos::responses::SearchResponse;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;

/// Public certificate lookup. Always 200: misses are reported in the body,
/// with a mode-specific message, not as an HTTP error.
pub async fn search_certificates(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let q = query.q.trim();
    if q.is_empty() {
        return Err(AppError::Validation("Please enter a search term".into()));
    }

    let mode = query.mode.as_deref().unwrap_or("email");

    let certificates = match mode {
        "certificate-id" => state.certificate_repo.find_by_number(q).await?,
        "email" => {
            let participant = match state
                .participant_repo
                .find_by_email(&q.to_lowercase())
                .await?
            {
                Some(p) => p,
                None => {
                    return Ok(Json(SearchResponse {
                        found: false,
                        message: format!("No participant found with email: {q}"),
                        certificates: Vec::new(),
                    }))
                }
            };
            state
                .certificate_repo
                .list_by_participant(&participant.id)
                .await?
        }
        other => {
            return Err(AppError::Validation(format!(
                "Unknown search mode: {other}"
            )))
        }
    };

    if certificates.is_empty() {
        let message = match mode {
            "certificate-id" => format!("No certificate found with ID: {q}"),
            _ => format!("No certificates found for email: {q}"),
        };
        return Ok(Json(SearchResponse {
            found: false,
            message,
            certificates,
        }));
    }

    Ok(Json(SearchResponse {
        found: true,
        message: format!("Found {} certificate(s)", certificates.len()),
        certificates,
    }))
}
