//! Authentication routes

use axum::{routing::post, Router};

use super::handlers;

/// Creates and returns the authentication router
///
/// # Routes
/// - `POST /api/auth/token` - Issue a session token for a verified identity
pub fn auth_routes() -> Router {
    Router::new().route("/api/auth/token", post(handlers::issue_token))
}
