use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use crate::domain::models::session::SessionIdentity;
use crate::domain::services::auth_service::ACCESS_DENIED;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tower_cookies::Cookies;
use tracing::Span;

pub const SESSION_COOKIE: &str = "session_token";

/// Extractor for admin-only routes. Resolves the session cookie against the
/// session store; a valid session belonging to a non-admin identity is
/// rejected with the fixed access-denied message.
pub struct AuthAdmin(pub SessionIdentity);

impl<S> FromRequestParts<S> for AuthAdmin
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let cookies = parts
            .extensions
            .get::<Cookies>()
            .ok_or(AppError::Internal)?;

        let raw_token = cookies
            .get(SESSION_COOKIE)
            .ok_or(AppError::Unauthorized)?
            .value()
            .to_string();

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        let identity = app_state
            .auth_service
            .session(&raw_token)
            .await?
            .ok_or(AppError::Unauthorized)?;

        if !identity.is_admin {
            return Err(AppError::Forbidden(ACCESS_DENIED.to_string()));
        }

        Span::current().record("user_id", &identity.user_id);

        Ok(AuthAdmin(identity))
    }
}
