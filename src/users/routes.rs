//! User registry routes

use axum::{
    routing::{delete, get, patch},
    Router,
};

use super::handlers;

/// Creates and returns the users router
///
/// # Routes
/// - `GET /api/users` - List users (admin)
/// - `POST /api/users` - Register the authenticated caller
/// - `PATCH /api/users/:id/role` - Promote to admin (admin)
/// - `GET /api/users/admin/:email` - Role inspection (owner)
/// - `DELETE /api/users/:id` - Delete a user (admin)
pub fn users_routes() -> Router {
    Router::new()
        .route(
            "/api/users",
            get(handlers::get_users).post(handlers::register_user),
        )
        .route("/api/users/:id/role", patch(handlers::promote_user))
        .route("/api/users/admin/:email", get(handlers::check_admin))
        .route("/api/users/:id", delete(handlers::delete_user))
}
