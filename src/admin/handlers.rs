//! Admin dashboard handlers

use axum::{extract::Extension, Json};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use super::models::{CategorySpend, DashboardStats};
use super::services::StatsService;
use crate::auth::AdminUser;
use crate::common::{safe_email_log, ApiError, AppState};

/// GET /api/admin/stats - Aggregate dashboard totals
pub async fn get_dashboard_stats(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    admin: AdminUser,
) -> Result<Json<DashboardStats>, ApiError> {
    let state = state_lock.read().await.clone();
    let stats_service = StatsService::new(state.db.clone());

    let stats = stats_service.summary().await?;

    info!(
        admin_email = %safe_email_log(&admin.email),
        user = stats.user,
        product = stats.product,
        orders = stats.orders,
        revenue = stats.revenue,
        "Dashboard stats fetched"
    );

    Ok(Json(stats))
}

/// GET /api/admin/order-stats - Spend per menu category
pub async fn get_order_stats(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    admin: AdminUser,
) -> Result<Json<Vec<CategorySpend>>, ApiError> {
    let state = state_lock.read().await.clone();
    let stats_service = StatsService::new(state.db.clone());

    let breakdown = stats_service.category_breakdown().await?;

    info!(
        admin_email = %safe_email_log(&admin.email),
        categories = breakdown.len(),
        "Order stats fetched"
    );

    Ok(Json(breakdown))
}
