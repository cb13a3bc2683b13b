use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use crate::api::dtos::requests::ImportQuery;
use crate::api::dtos::responses::{ImportResponse, RosterPreviewResponse};
use crate::api::extractors::auth::AuthAdmin;
use crate::domain::models::participant::Participant;
use crate::domain::services::roster::{dedupe_last_wins, parse_roster};
use crate::error::AppError;
use crate::state::AppState;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

/// Parses an uploaded roster without touching the store, returning every
/// row with its validation verdict so the admin can fix the file.
pub async fn preview_roster(
    State(_state): State<Arc<AppState>>,
    _admin: AuthAdmin,
    Query(query): Query<ImportQuery>,
    body: String,
) -> Result<impl IntoResponse, AppError> {
    let roster = parse_roster(&body, query.event_id.as_deref())?;

    Ok(Json(RosterPreviewResponse {
        total: roster.rows.len(),
        invalid: roster.invalid_count(),
        rows: roster.rows,
    }))
}

/// All-or-nothing roster upload: refused outright while any row is invalid,
/// then committed as one batched upsert keyed on email.
pub async fn import_roster(
    State(state): State<Arc<AppState>>,
    _admin: AuthAdmin,
    Query(query): Query<ImportQuery>,
    body: String,
) -> Result<impl IntoResponse, AppError> {
    let roster = parse_roster(&body, query.event_id.as_deref())?;

    let candidates = roster.into_candidates().map_err(|invalid| {
        AppError::Validation(format!(
            "{invalid} rows contain errors. Please fix them before uploading."
        ))
    })?;

    if candidates.iter().any(|c| c.event_id.is_none()) {
        return Err(AppError::Validation(
            "Event ID is required. Either select an event or include an eventId column in your CSV."
                .into(),
        ));
    }

    let event_ids: HashSet<&str> = candidates
        .iter()
        .filter_map(|c| c.event_id.as_deref())
        .collect();
    for event_id in event_ids {
        state
            .event_repo
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event not found: {event_id}")))?;
    }

    let candidates = dedupe_last_wins(candidates);

    let batch: Vec<Participant> = candidates
        .iter()
        .map(|c| {
            Participant::new(c.email.clone(), c.full_name.clone(), c.organization.clone())
        })
        .collect();

    state.participant_repo.upsert_batch(&batch).await?;

    let emails: Vec<String> = batch.iter().map(|p| p.email.clone()).collect();
    let participants = state.participant_repo.find_by_emails(&emails).await?;

    info!("Roster imported: {} participants", participants.len());

    Ok(Json(ImportResponse {
        imported: batch.len(),
        participants,
    }))
}

pub async fn list_participants(
    State(state): State<Arc<AppState>>,
    _admin: AuthAdmin,
) -> Result<impl IntoResponse, AppError> {
    let participants = state.participant_repo.list().await?;
    Ok(Json(participants))
}
