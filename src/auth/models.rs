//! Session Models
//!
//! The identity recovered from a verified token and the outcome of a
//! verification attempt.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::auth::jwt::SessionClaims;

/// Authenticated identity and its validity window.
///
/// Only built from claims that passed verification; there is no public
/// constructor and no `Deserialize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPayload {
    user_id: String,
    email: String,
    expires_at: DateTime<Utc>,
}

impl SessionPayload {
    pub(crate) fn from_verified(claims: SessionClaims) -> Self {
        Self {
            user_id: claims.user_id,
            email: claims.email,
            expires_at: claims.expires_at,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}

/// Why a request ended up unauthenticated. Kept for logging only; callers
/// see a plain `None` from the service adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// No `auth-token` cookie on the request
    Missing,
    /// Cookie present with an empty value
    Empty,
    /// Not a decodable token or required claims absent
    Malformed,
    /// Signature or algorithm did not match
    BadSignature,
    Expired,
    /// `exp` and `expiresAt` disagree
    Inconsistent,
}

impl RejectReason {
    pub fn as_str(self) -> &'static str {
        match self {
            RejectReason::Missing => "missing",
            RejectReason::Empty => "empty",
            RejectReason::Malformed => "malformed",
            RejectReason::BadSignature => "bad_signature",
            RejectReason::Expired => "expired",
            RejectReason::Inconsistent => "inconsistent",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of checking a request's session cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Authenticated(SessionPayload),
    Unauthenticated(RejectReason),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn into_payload(self) -> Option<SessionPayload> {
        match self {
            SessionState::Authenticated(payload) => Some(payload),
            SessionState::Unauthenticated(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn payload() -> SessionPayload {
        let expires_at = Utc::now() + Duration::days(7);
        SessionPayload::from_verified(SessionClaims {
            user_id: "user-123".to_string(),
            email: "test@example.com".to_string(),
            expires_at,
            iat: Utc::now().timestamp(),
            exp: expires_at.timestamp(),
        })
    }

    #[test]
    fn payload_serializes_camel_case() {
        let value = serde_json::to_value(payload()).unwrap();
        assert_eq!(value["userId"], "user-123");
        assert_eq!(value["email"], "test@example.com");
        assert!(value["expiresAt"].is_string());
        assert!(value.get("iat").is_none());
    }

    #[test]
    fn state_collapses_to_option() {
        let state = SessionState::Authenticated(payload());
        assert!(state.is_authenticated());
        assert_eq!(state.into_payload().unwrap().user_id(), "user-123");

        let state = SessionState::Unauthenticated(RejectReason::Expired);
        assert!(!state.is_authenticated());
        assert!(state.into_payload().is_none());
    }

    #[test]
    fn reasons_display_as_snake_case() {
        assert_eq!(RejectReason::BadSignature.to_string(), "bad_signature");
        assert_eq!(RejectReason::Missing.to_string(), "missing");
    }
}
