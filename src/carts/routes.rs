//! Cart routes

use axum::{
    routing::{delete, get},
    Router,
};

use super::handlers;

/// Creates and returns the carts router
///
/// # Routes
/// - `GET /api/carts?email=` - List the caller's cart (owner)
/// - `POST /api/carts` - Add a line to the caller's cart
/// - `DELETE /api/carts/:id` - Remove one of the caller's lines
pub fn carts_routes() -> Router {
    Router::new()
        .route(
            "/api/carts",
            get(handlers::get_cart).post(handlers::add_cart_item),
        )
        .route("/api/carts/:id", delete(handlers::delete_cart_item))
}
