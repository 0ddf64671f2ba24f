//! # Server Module
//!
//! HTTP server setup and route configuration.

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware, routing::get};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::auth::{SessionMiddleware, SessionService};
use crate::config::{Config, SessionConfig};
use crate::routes::{auth, health::ping};

/// Application state shared across all route handlers
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionService>,
}

impl AppState {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            sessions: Arc::new(SessionService::new(config)),
        }
    }
}

/// Build the application router without transport-level layers.
pub fn router(app_state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/api/auth/me", get(auth::me))
        .layer(middleware::from_fn_with_state(
            app_state.sessions.clone(),
            SessionMiddleware::require_session,
        ));

    Router::new()
        .route("/ping", get(ping))
        .merge(auth::create_auth_routes())
        .merge(protected_routes)
        .with_state(app_state)
}

/// Starts the HTTP server and serves until the process is terminated.
pub async fn start(config: Config) -> Result<()> {
    let app_state = AppState::new(&config.session);

    let origin = config
        .server
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("invalid CORS_ORIGIN {:?}", config.server.cors_origin))?;

    let app = router(app_state).layer(
        ServiceBuilder::new().layer(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::ACCEPT])
                .allow_credentials(true),
        ),
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    tracing::info!("Listening on http://{}", addr);
    tracing::info!("Environment: {:?}", config.session.environment);

    axum::serve(listener, app).await.context("server error")
}
