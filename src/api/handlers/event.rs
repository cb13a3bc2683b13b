use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use crate::api::dtos::requests::CreateEventRequest;
use crate::api::extractors::auth::AuthAdmin;
use crate::domain::models::event::Event;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

pub async fn create_event(
    State(state): State<Arc<AppState>>,
    AuthAdmin(identity): AuthAdmin,
    Json(payload): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("Event name is required".into()));
    }
    if payload.end_date < payload.start_date {
        return Err(AppError::Validation(
            "End date must be on or after the start date".into(),
        ));
    }

    let event = state
        .event_repo
        .create(&Event::new(
            payload.name.trim().to_string(),
            payload.description,
            payload.start_date,
            payload.end_date,
            identity.user_id,
        ))
        .await?;

    info!("Event created: {}", event.id);

    Ok((StatusCode::CREATED, Json(event)))
}

pub async fn list_events(
    State(state): State<Arc<AppState>>,
    _admin: AuthAdmin,
) -> Result<impl IntoResponse, AppError> {
    let events = state.event_repo.list().await?;
    Ok(Json(events))
}
