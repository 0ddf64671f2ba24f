//! # Authentication Module
//!
//! Stateless cookie sessions: token signing and verification, cookie
//! accessors for both request surfaces, the session service, and the
//! middleware that gates protected routes.

pub mod cookies;
pub mod jwt;
pub mod middleware;
pub mod models;
pub mod service;

pub use cookies::{CookieSource, CookieStore, SESSION_COOKIE_NAME};
pub use middleware::{RequestSessionExt, SessionMiddleware};
pub use models::{RejectReason, SessionPayload, SessionState};
pub use service::SessionService;
