use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use crate::api::dtos::requests::GenerateCertificateRequest;
use crate::api::extractors::auth::AuthAdmin;
use crate::domain::models::certificate::Certificate;
use crate::domain::services::certificates::{
    assemble, generate_certificate_number, CertificateOverrides,
};
use crate::domain::services::pdf;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

/// Assembles template data for a participant/event pair and persists the
/// issuance record. Rendering is separate; this endpoint never produces PDF
/// bytes.
pub async fn generate_certificate(
    State(state): State<Arc<AppState>>,
    _admin: AuthAdmin,
    Json(payload): Json<GenerateCertificateRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (certificate_number, data) = assemble_from_request(&state, &payload).await?;

    let template_json =
        serde_json::to_string(&data).map_err(|_| AppError::Internal)?;

    let certificate = state
        .certificate_repo
        .create(&Certificate::new(
            payload.participant_id.clone(),
            payload.event_id.clone(),
            certificate_number,
            data.issue_date,
            Some(template_json),
        ))
        .await?;

    info!("Certificate issued: {}", certificate.certificate_number);

    Ok((StatusCode::CREATED, Json(certificate)))
}

/// Renders the achievement design for on-screen inspection without
/// persisting anything.
pub async fn preview_certificate(
    State(state): State<Arc<AppState>>,
    _admin: AuthAdmin,
    Json(payload): Json<GenerateCertificateRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (certificate_number, data) = assemble_from_request(&state, &payload).await?;

    let bytes = pdf::render_achievement(&data, &certificate_number, &state.config.certificate_prefix)?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, "inline".to_string()),
        ],
        bytes,
    ))
}

pub async fn list_certificates(
    State(state): State<Arc<AppState>>,
    _admin: AuthAdmin,
) -> Result<impl IntoResponse, AppError> {
    let certificates = state.certificate_repo.list().await?;
    Ok(Json(certificates))
}

/// Public download by certificate number, rendered on demand from the
/// stored template snapshot.
pub async fn download_certificate(
    State(state): State<Arc<AppState>>,
    Path(certificate_number): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let matches = state
        .certificate_repo
        .find_by_number(&certificate_number)
        .await?;

    let certificate = matches
        .first()
        .ok_or_else(|| AppError::NotFound("Certificate not found".into()))?;

    let bytes = pdf::render_participation(certificate)?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}.pdf\"", certificate.certificate_number),
            ),
        ],
        bytes,
    ))
}

async fn assemble_from_request(
    state: &AppState,
    payload: &GenerateCertificateRequest,
) -> Result<(String, crate::domain::models::certificate::TemplateData), AppError> {
    let participant = state
        .participant_repo
        .find_by_id(&payload.participant_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Participant not found".into()))?;

    let event = state
        .event_repo
        .find_by_id(&payload.event_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".into()))?;

    let overrides = CertificateOverrides {
        certificate_number: payload.certificate_number.clone(),
        issue_date: payload.issue_date,
        certifying_authority: payload.certifying_authority.clone(),
        position: payload.position.clone(),
        venue: payload.venue.clone(),
        custom_text: payload.custom_text.clone(),
    };

    let certificate_number = overrides
        .certificate_number
        .clone()
        .unwrap_or_else(|| generate_certificate_number(&state.config.certificate_prefix));

    Ok((certificate_number, assemble(&participant, &event, &overrides)))
}
