//! Session Service
//!
//! Issues, reads and clears the `auth-token` session cookie. Sessions are
//! stateless: the signed cookie is the only record, and expiry is the only
//! way a session ends short of an explicit logout.

use axum::http::Request;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{DateTime, Utc};
use time::OffsetDateTime;

use crate::auth::cookies::{CookieSource, CookieStore, SESSION_COOKIE_NAME};
use crate::auth::jwt::JwtService;
use crate::auth::models::{RejectReason, SessionPayload, SessionState};
use crate::config::SessionConfig;
use crate::error::Result;

#[derive(Clone)]
pub struct SessionService {
    jwt: JwtService,
    secure_cookies: bool,
}

impl SessionService {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            jwt: JwtService::new(&config.secret),
            secure_cookies: config.environment.is_production(),
        }
    }

    /// Sign a new session for `user_id` and store it in the `auth-token` cookie.
    ///
    /// The caller is responsible for having established the identity. An empty
    /// `user_id` fails with
    /// [`crate::error::SessionError::EmptyUserId`] and sets no cookie.
    pub fn create_session<S>(&self, store: &mut S, user_id: &str, email: &str) -> Result<()>
    where
        S: CookieStore + ?Sized,
    {
        self.create_session_at(store, Utc::now(), user_id, email)
    }

    pub(crate) fn create_session_at<S>(
        &self,
        store: &mut S,
        now: DateTime<Utc>,
        user_id: &str,
        email: &str,
    ) -> Result<()>
    where
        S: CookieStore + ?Sized,
    {
        let issued = self.jwt.create_token_at(now, user_id, email)?;
        let cookie = self.session_cookie(issued.token, issued.claims.expires_at)?;
        store.set_cookie(cookie);

        tracing::info!(
            user_id,
            expires_at = %issued.claims.expires_at,
            "session issued"
        );
        Ok(())
    }

    fn session_cookie(&self, token: String, expires_at: DateTime<Utc>) -> Result<Cookie<'static>> {
        let expires = OffsetDateTime::from_unix_timestamp(expires_at.timestamp())?;

        Ok(Cookie::build((SESSION_COOKIE_NAME, token))
            .http_only(true)
            .same_site(SameSite::Lax)
            .path("/")
            .secure(self.secure_cookies)
            .expires(expires)
            .build())
    }

    /// Verify whatever session cookie `source` carries.
    pub fn authenticate<C>(&self, source: &C) -> SessionState
    where
        C: CookieSource + ?Sized,
    {
        let state = match source.cookie_value(SESSION_COOKIE_NAME) {
            None => SessionState::Unauthenticated(RejectReason::Missing),
            Some(token) if token.is_empty() => SessionState::Unauthenticated(RejectReason::Empty),
            Some(token) => match self.jwt.validate_token(&token) {
                Ok(claims) => SessionState::Authenticated(SessionPayload::from_verified(claims)),
                Err(reason) => SessionState::Unauthenticated(reason),
            },
        };

        if let SessionState::Unauthenticated(reason) = &state {
            tracing::debug!(%reason, "session rejected");
        }
        state
    }

    /// Session carried by the handler's cookie jar, if any.
    pub fn get_session(&self, jar: &CookieJar) -> Option<SessionPayload> {
        self.authenticate(jar).into_payload()
    }

    /// Session carried by an inbound request's `Cookie` header, if any.
    pub fn verify_session<B>(&self, req: &Request<B>) -> Option<SessionPayload> {
        self.authenticate(req.headers()).into_payload()
    }

    /// Clear the session cookie.
    pub fn delete_session<S>(&self, store: &mut S)
    where
        S: CookieStore + ?Sized,
    {
        store.delete_cookie(SESSION_COOKIE_NAME);
        tracing::info!("session cleared");
    }
}
