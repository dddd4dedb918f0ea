//! Admin dashboard routes

use axum::{routing::get, Router};

use super::handlers;

/// Creates and returns the admin router
///
/// # Routes
/// - `GET /api/admin/stats` - Aggregate totals (admin)
/// - `GET /api/admin/order-stats` - Per-category spend (admin)
pub fn admin_routes() -> Router {
    Router::new()
        .route("/api/admin/stats", get(handlers::get_dashboard_stats))
        .route("/api/admin/order-stats", get(handlers::get_order_stats))
}
