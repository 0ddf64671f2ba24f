//! # UIGen Session Server
//!
//! Stateless, cookie-backed sessions for the UIGen component generator.
//! A login handler calls [`auth::SessionService::create_session`] once it has
//! established who the user is; handlers read the session back with
//! [`auth::SessionService::get_session`], middleware with
//! [`auth::SessionService::verify_session`], and logout clears it with
//! [`auth::SessionService::delete_session`].
//!
//! ## Modules
//! - `auth`: token signing and verification, cookie access, middleware
//! - `config`: environment variable configuration
//! - `routes`: HTTP route handlers
//! - `server`: router assembly and server startup

pub mod auth;
pub mod config;
pub mod error;
pub mod routes;
pub mod server;
