//! Auth routes for reading the current session and logging out

use axum::{
    Extension, Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use axum_extra::extract::cookie::CookieJar;

use crate::auth::SessionPayload;
use crate::server::AppState;

/// `GET /api/auth/session`: the session carried by the cookie jar.
pub async fn session(
    State(app_state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<SessionPayload>, StatusCode> {
    app_state
        .sessions
        .get_session(&jar)
        .map(Json)
        .ok_or(StatusCode::UNAUTHORIZED)
}

/// `GET /api/auth/me`: mounted behind `SessionMiddleware::require_session`.
pub async fn me(Extension(session): Extension<SessionPayload>) -> Json<SessionPayload> {
    Json(session)
}

/// `POST /api/auth/logout`: clears the session cookie, always `204`.
pub async fn logout(
    State(app_state): State<AppState>,
    mut jar: CookieJar,
) -> (StatusCode, CookieJar) {
    app_state.sessions.delete_session(&mut jar);
    (StatusCode::NO_CONTENT, jar)
}

pub fn create_auth_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/session", get(session))
        .route("/api/auth/logout", post(logout))
}
