// # Routes Module
//
// HTTP route handlers, grouped by functionality. Routers are assembled in
// `server.rs`.

/// Health check endpoint
pub mod health;

/// Session read and logout endpoints
pub mod auth;
