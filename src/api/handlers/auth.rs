use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use crate::api::dtos::requests::{SignInRequest, SignUpRequest};
use crate::api::dtos::responses::{AuthResponse, SessionResponse, UserProfile};
use crate::api::extractors::auth::SESSION_COOKIE;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use time::Duration;
use tower_cookies::cookie::SameSite;
use tower_cookies::{Cookie, Cookies};
use tracing::info;

pub async fn signup(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Json(payload): Json<SignUpRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (user, token) = state.auth_service.sign_up(&payload.email, &payload.password).await?;

    set_session_cookie(&cookies, &token);

    info!("Admin registered: {}", user.id);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            user: UserProfile {
                id: user.id,
                email: user.email,
                is_admin: true,
            },
        }),
    ))
}

pub async fn signin(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Json(payload): Json<SignInRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (user, token) = state.auth_service.sign_in(&payload.email, &payload.password).await?;

    set_session_cookie(&cookies, &token);

    info!("Admin signed in: {}", user.id);

    Ok(Json(AuthResponse {
        user: UserProfile {
            id: user.id,
            email: user.email,
            is_admin: true,
        },
    }))
}

pub async fn signout(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
) -> Result<impl IntoResponse, AppError> {
    if let Some(cookie) = cookies.get(SESSION_COOKIE) {
        let _ = state.auth_service.sign_out(cookie.value()).await;
    }

    cookies.remove(Cookie::build((SESSION_COOKIE, "")).path("/").into());

    info!("Admin signed out");

    Ok(StatusCode::OK)
}

/// Introspection for the frontend's session bootstrap. Always 200; the body
/// says whether the cookie resolved to a live admin session.
pub async fn session(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
) -> Result<impl IntoResponse, AppError> {
    let identity = match cookies.get(SESSION_COOKIE) {
        Some(cookie) => state.auth_service.session(cookie.value()).await?,
        None => None,
    };

    Ok(Json(SessionResponse {
        authenticated: identity.is_some(),
        user: identity.map(|i| UserProfile {
            id: i.user_id,
            email: i.email,
            is_admin: i.is_admin,
        }),
    }))
}

fn set_session_cookie(cookies: &Cookies, token: &str) {
    let mut cookie = Cookie::new(SESSION_COOKIE, token.to_string());
    cookie.set_http_only(true);
    cookie.set_secure(true);
    cookie.set_same_site(SameSite::Strict);
    cookie.set_path("/");
    cookie.set_max_age(Duration::days(7));
    cookies.add(cookie);
}
