//! Menu handlers

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

use super::models::{CreateMenuItemRequest, DeleteResponse, MenuItem};
use crate::auth::AdminUser;
use crate::common::{generate_menu_item_id, safe_email_log, ApiError, AppState, Validator};

/// GET /api/menu - List the full menu (public)
pub async fn get_menu(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
) -> Result<Json<Vec<MenuItem>>, ApiError> {
    let state = state_lock.read().await.clone();

    let items = sqlx::query_as::<_, MenuItem>("SELECT * FROM menu_items ORDER BY category, name")
        .fetch_all(&state.db)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error fetching menu");
            ApiError::DatabaseError(e)
        })?;

    Ok(Json(items))
}

/// POST /api/menu - Add a menu item
pub async fn create_menu_item(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    admin: AdminUser,
    Json(request): Json<CreateMenuItemRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let validation = request.validate(&request);
    if !validation.is_valid {
        return Err(validation.into());
    }

    let state = state_lock.read().await.clone();

    let id = generate_menu_item_id();
    sqlx::query(
        "INSERT INTO menu_items (id, name, category, price, recipe, image) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&id)
    .bind(&request.name)
    .bind(&request.category)
    .bind(request.price)
    .bind(request.recipe.as_deref())
    .bind(request.image.as_deref())
    .execute(&state.db)
    .await
    .map_err(|e| {
        error!(error = %e, "Database error inserting menu item");
        ApiError::DatabaseError(e)
    })?;

    let item = sqlx::query_as::<_, MenuItem>("SELECT * FROM menu_items WHERE id = ?")
        .bind(&id)
        .fetch_one(&state.db)
        .await
        .map_err(|e| {
            error!(error = %e, menu_item_id = %id, "Database error fetching new menu item");
            ApiError::DatabaseError(e)
        })?;

    info!(
        admin_email = %safe_email_log(&admin.email),
        menu_item_id = %item.id,
        category = %item.category,
        "Menu item created"
    );

    Ok((StatusCode::CREATED, Json(item)))
}

/// DELETE /api/menu/:id - Remove a menu item
pub async fn delete_menu_item(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    admin: AdminUser,
    Path(item_id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let result = sqlx::query("DELETE FROM menu_items WHERE id = ?")
        .bind(&item_id)
        .execute(&state.db)
        .await
        .map_err(|e| {
            error!(error = %e, menu_item_id = %item_id, "Database error deleting menu item");
            ApiError::DatabaseError(e)
        })?;

    info!(
        admin_email = %safe_email_log(&admin.email),
        menu_item_id = %item_id,
        deleted = result.rows_affected(),
        "Menu item delete processed"
    );

    Ok(Json(DeleteResponse {
        deleted: result.rows_affected(),
    }))
}
