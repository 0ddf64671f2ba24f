//! Error types for session issuance.
//!
//! Only the fatal paths live here. Verification failures are not errors at
//! the service boundary; see [`crate::auth::models::RejectReason`].

use thiserror::Error;

pub type Result<T, E = SessionError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum SessionError {
    /// The signer could not produce a token (bad key material, encoding failure).
    #[error("failed to sign session token: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    /// Sessions are bound to a non-empty user id.
    #[error("session user id must not be empty")]
    EmptyUserId,

    /// The computed expiry does not fit a cookie `Expires` attribute.
    #[error("session expiry out of range: {0}")]
    InvalidExpiry(#[from] time::error::ComponentRange),
}
