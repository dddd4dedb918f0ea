//! Cart handlers

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

use super::models::{AddCartItemRequest, CartItem, CartQuery, DeleteResponse};
use crate::auth::{ensure_owner, AuthedUser};
use crate::common::{generate_cart_item_id, safe_email_log, ApiError, AppState};

/// GET /api/carts?email= - List the caller's cart lines
///
/// A missing or empty email yields an empty list; a mismatching one is an
/// ownership violation.
pub async fn get_cart(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Query(query): Query<CartQuery>,
) -> Result<Json<Vec<CartItem>>, ApiError> {
    let email = match query.email.as_deref() {
        Some(e) if !e.is_empty() => e.to_string(),
        _ => return Ok(Json(Vec::new())),
    };

    ensure_owner(&authed, &email)?;

    let state = state_lock.read().await.clone();

    let items = sqlx::query_as::<_, CartItem>("SELECT * FROM cart_items WHERE user_email = ?")
        .bind(&email)
        .fetch_all(&state.db)
        .await
        .map_err(|e| {
            error!(
                error = %e,
                email = %safe_email_log(&email),
                "Database error fetching cart"
            );
            ApiError::DatabaseError(e)
        })?;

    Ok(Json(items))
}

/// POST /api/carts - Add a menu item to the caller's cart
pub async fn add_cart_item(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(request): Json<AddCartItemRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if request.menu_item_id.trim().is_empty() {
        return Err(ApiError::ValidationError(
            "menu_item_id is required".to_string(),
        ));
    }
    if !request.price.is_finite() || request.price < 0.0 {
        return Err(ApiError::ValidationError(
            "price must be a non-negative number".to_string(),
        ));
    }

    let state = state_lock.read().await.clone();

    let id = generate_cart_item_id();
    sqlx::query(
        "INSERT INTO cart_items (id, user_email, menu_item_id, name, image, price) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&id)
    .bind(&authed.email)
    .bind(&request.menu_item_id)
    .bind(&request.name)
    .bind(request.image.as_deref())
    .bind(request.price)
    .execute(&state.db)
    .await
    .map_err(|e| {
        error!(
            error = %e,
            email = %safe_email_log(&authed.email),
            "Database error inserting cart line"
        );
        ApiError::DatabaseError(e)
    })?;

    let item = sqlx::query_as::<_, CartItem>("SELECT * FROM cart_items WHERE id = ?")
        .bind(&id)
        .fetch_one(&state.db)
        .await
        .map_err(|e| {
            error!(error = %e, cart_item_id = %id, "Database error fetching new cart line");
            ApiError::DatabaseError(e)
        })?;

    info!(
        email = %safe_email_log(&authed.email),
        cart_item_id = %item.id,
        menu_item_id = %item.menu_item_id,
        "Cart line added"
    );

    Ok((StatusCode::CREATED, Json(item)))
}

/// DELETE /api/carts/:id - Remove one of the caller's cart lines
///
/// Scoped to the caller's own lines; deleting an absent (or foreign) id is
/// a no-op, not an error.
pub async fn delete_cart_item(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(item_id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let result = sqlx::query("DELETE FROM cart_items WHERE id = ? AND user_email = ?")
        .bind(&item_id)
        .bind(&authed.email)
        .execute(&state.db)
        .await
        .map_err(|e| {
            error!(error = %e, cart_item_id = %item_id, "Database error deleting cart line");
            ApiError::DatabaseError(e)
        })?;

    info!(
        email = %safe_email_log(&authed.email),
        cart_item_id = %item_id,
        deleted = result.rows_affected(),
        "Cart line delete processed"
    );

    Ok(Json(DeleteResponse {
        deleted: result.rows_affected(),
    }))
}
