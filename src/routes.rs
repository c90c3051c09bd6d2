//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /api/hello`                - API liveness greeting
//! - `POST /api/shorturl`             - Create a short URL from a form-posted candidate
//! - `GET  /api/shorturl/{short_url}` - Redirect a short code to its original URL
//! - `GET  /`                         - Static index page
//! - `/public/*`                      - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//!
//! Trailing-slash normalization is applied around the whole router in
//! [`crate::server::run`].

use crate::api::handlers::{hello_handler, redirect_handler, shorten_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower_http::services::{ServeDir, ServeFile};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/api/hello", get(hello_handler))
        .route("/api/shorturl", post(shorten_handler))
        .route("/api/shorturl/{short_url}", get(redirect_handler))
        .route_service("/", ServeFile::new("views/index.html"))
        .nest_service("/public", ServeDir::new("public"))
        .with_state(state)
        .layer(tracing::layer())
}
