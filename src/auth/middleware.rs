//! Session Middleware
//!
//! Axum middleware that checks the inbound request's session cookie and
//! injects the verified [`SessionPayload`] for downstream handlers.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::auth::{models::SessionPayload, service::SessionService};

pub struct SessionMiddleware;

impl SessionMiddleware {
    /// Reject requests without a valid session with `401 Unauthorized`
    pub async fn require_session(
        State(sessions): State<Arc<SessionService>>,
        mut req: Request,
        next: Next,
    ) -> Result<Response, StatusCode> {
        let Some(payload) = sessions.verify_session(&req) else {
            tracing::warn!("[SessionMiddleware] unauthenticated {} {}", req.method(), req.uri());
            return Err(StatusCode::UNAUTHORIZED);
        };

        tracing::debug!(user_id = payload.user_id(), "[SessionMiddleware] session verified");
        req.extensions_mut().insert(payload);

        Ok(next.run(req).await)
    }

    /// Optional session - doesn't fail if the cookie is missing or invalid
    pub async fn optional_session(
        State(sessions): State<Arc<SessionService>>,
        mut req: Request,
        next: Next,
    ) -> Response {
        if let Some(payload) = sessions.verify_session(&req) {
            req.extensions_mut().insert(payload);
        }

        next.run(req).await
    }
}

/// Extension trait for reading the injected session from a request
pub trait RequestSessionExt {
    fn session(&self) -> Option<&SessionPayload>;
    fn require_session(&self) -> Result<&SessionPayload, StatusCode>;
}

impl RequestSessionExt for Request {
    fn session(&self) -> Option<&SessionPayload> {
        self.extensions().get::<SessionPayload>()
    }

    fn require_session(&self) -> Result<&SessionPayload, StatusCode> {
        self.session().ok_or(StatusCode::UNAUTHORIZED)
    }
}
