//! JWT Token Service
//!
//! Signs and verifies the compact HS256 tokens that back a session cookie.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::auth::models::RejectReason;
use crate::config::SigningSecret;
use crate::error::{Result, SessionError};

/// Lifetime of a freshly issued session, in days.
pub const SESSION_TTL_DAYS: i64 = 7;

/// Largest accepted gap, in seconds, between `exp` and the payload `expiresAt`.
const EXPIRY_SKEW_SECS: i64 = 1;

/// JWT Claims structure containing the session identity and token metadata
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionClaims {
    /// Opaque user identifier
    pub user_id: String,
    /// User email
    pub email: String,
    /// Payload-level expiry, mirrors `exp`
    pub expires_at: DateTime<Utc>,
    /// Token issued at timestamp
    pub iat: i64,
    /// Token expiration timestamp
    pub exp: i64,
}

/// A signed token together with the claims it encodes.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub claims: SessionClaims,
}

/// JWT Service for token operations
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtService {
    /// Create a new JWT service with the provided secret
    pub fn new(secret: &SigningSecret) -> Self {
        let encoding_key = EncodingKey::from_secret(secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp"]);
        validation.leeway = 0;

        Self {
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Generate a session token for a user, valid for [`SESSION_TTL_DAYS`].
    /// An empty `user_id` is refused with [`SessionError::EmptyUserId`].
    pub fn create_token(&self, user_id: &str, email: &str) -> Result<IssuedToken> {
        self.create_token_at(Utc::now(), user_id, email)
    }

    pub(crate) fn create_token_at(
        &self,
        now: DateTime<Utc>,
        user_id: &str,
        email: &str,
    ) -> Result<IssuedToken> {
        if user_id.is_empty() {
            return Err(SessionError::EmptyUserId);
        }
        let expires_at = now + Duration::days(SESSION_TTL_DAYS);

        let claims = SessionClaims {
            user_id: user_id.to_owned(),
            email: email.to_owned(),
            expires_at,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok(IssuedToken { token, claims })
    }

    /// Validate a token and return its claims, or the reason it was rejected
    pub fn validate_token(&self, token: &str) -> Result<SessionClaims, RejectReason> {
        self.validate_token_at(token, Utc::now())
    }

    pub(crate) fn validate_token_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<SessionClaims, RejectReason> {
        let claims = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| classify(e.kind()))?
            .claims;

        if claims.user_id.is_empty() {
            return Err(RejectReason::Malformed);
        }
        if (claims.expires_at.timestamp() - claims.exp).abs() > EXPIRY_SKEW_SECS {
            return Err(RejectReason::Inconsistent);
        }
        if claims.expires_at <= now {
            return Err(RejectReason::Expired);
        }

        Ok(claims)
    }
}

fn classify(kind: &ErrorKind) -> RejectReason {
    match kind {
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => RejectReason::BadSignature,
        ErrorKind::ExpiredSignature => RejectReason::Expired,
        _ => RejectReason::Malformed,
    }
}
