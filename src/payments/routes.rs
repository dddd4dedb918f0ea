//! Payment routes

use axum::{routing::post, Router};

use super::handlers;

/// Creates and returns the payments router
///
/// # Routes
/// - `POST /api/payments/intent` - Authorize a charge (no records written)
/// - `POST /api/payments` - Full checkout: authorize, record, clear cart
pub fn payments_routes() -> Router {
    Router::new()
        .route("/api/payments/intent", post(handlers::create_payment_intent))
        .route("/api/payments", post(handlers::checkout))
}
