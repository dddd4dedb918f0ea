//! Menu routes

use axum::{
    routing::{delete, get},
    Router,
};

use super::handlers;

/// Creates and returns the menu router
///
/// # Routes
/// - `GET /api/menu` - Public menu listing
/// - `POST /api/menu` - Add a menu item (admin)
/// - `DELETE /api/menu/:id` - Remove a menu item (admin)
pub fn menu_routes() -> Router {
    Router::new()
        .route(
            "/api/menu",
            get(handlers::get_menu).post(handlers::create_menu_item),
        )
        .route("/api/menu/:id", delete(handlers::delete_menu_item))
}
