//! Review routes

use axum::{routing::get, Router};

use super::handlers;

/// Creates and returns the reviews router
///
/// # Routes
/// - `GET /api/reviews` - Public review listing
/// - `POST /api/reviews` - Post a review (authenticated)
pub fn reviews_routes() -> Router {
    Router::new().route(
        "/api/reviews",
        get(handlers::get_reviews).post(handlers::create_review),
    )
}
