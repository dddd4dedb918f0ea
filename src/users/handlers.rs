//! User registry handlers

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use super::models::{AdminStatusResponse, DeleteResponse, MessageResponse, RegisterUserRequest};
use crate::auth::{ensure_owner, AdminUser, AuthedUser, User};
use crate::common::{generate_user_id, safe_email_log, ApiError, AppState};

/// GET /api/users - List all user records
pub async fn get_users(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    admin: AdminUser,
) -> Result<Json<Vec<User>>, ApiError> {
    let state = state_lock.read().await.clone();

    let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at DESC")
        .fetch_all(&state.db)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error fetching users list");
            ApiError::DatabaseError(e)
        })?;

    info!(
        admin_email = %safe_email_log(&admin.email),
        user_count = users.len(),
        "Users list fetched"
    );

    Ok(Json(users))
}

/// POST /api/users - Register the authenticated caller
///
/// Insert-if-absent: a second registration for the same email reports
/// "user already exists" without error. New accounts start with no role.
pub async fn register_user(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(request): Json<RegisterUserRequest>,
) -> Result<axum::response::Response, ApiError> {
    let state = state_lock.read().await.clone();

    let existing: Option<User> = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
        .bind(&authed.email)
        .fetch_optional(&state.db)
        .await
        .map_err(|e| {
            error!(
                error = %e,
                email = %safe_email_log(&authed.email),
                "Database error checking existing user during registration"
            );
            ApiError::DatabaseError(e)
        })?;

    if existing.is_some() {
        return Ok(Json(MessageResponse {
            message: "user already exists".to_string(),
        })
        .into_response());
    }

    let id = generate_user_id();
    sqlx::query("INSERT INTO users (id, email, name, role) VALUES (?, ?, ?, 'none')")
        .bind(&id)
        .bind(&authed.email)
        .bind(request.name.as_deref())
        .execute(&state.db)
        .await
        .map_err(|e| {
            error!(
                error = %e,
                email = %safe_email_log(&authed.email),
                "Database error inserting new user"
            );
            ApiError::DatabaseError(e)
        })?;

    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
        .bind(&id)
        .fetch_one(&state.db)
        .await
        .map_err(|e| {
            error!(error = %e, user_id = %id, "Database error fetching newly created user");
            ApiError::DatabaseError(e)
        })?;

    info!(
        user_id = %user.id,
        email = %safe_email_log(&user.email),
        "New user registered"
    );

    Ok((StatusCode::CREATED, Json(user)).into_response())
}

/// PATCH /api/users/:id/role - Promote a user to admin
pub async fn promote_user(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    admin: AdminUser,
    Path(user_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let result = sqlx::query("UPDATE users SET role = 'admin' WHERE id = ?")
        .bind(&user_id)
        .execute(&state.db)
        .await
        .map_err(|e| {
            error!(error = %e, target_user_id = %user_id, "Database error promoting user");
            ApiError::DatabaseError(e)
        })?;

    if result.rows_affected() == 0 {
        warn!(target_user_id = %user_id, "Role promotion failed: user not found");
        return Err(ApiError::NotFound("user not found".to_string()));
    }

    info!(
        admin_email = %safe_email_log(&admin.email),
        target_user_id = %user_id,
        "User promoted to admin"
    );

    Ok(Json(MessageResponse {
        message: "user promoted to admin".to_string(),
    }))
}

/// GET /api/users/admin/:email - Report whether the caller holds the admin role
///
/// Ownership-checked: callers may only inspect their own record.
pub async fn check_admin(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(email): Path<String>,
) -> Result<Json<AdminStatusResponse>, ApiError> {
    ensure_owner(&authed, &email)?;

    let state = state_lock.read().await.clone();

    let role: Option<String> = sqlx::query_scalar("SELECT role FROM users WHERE email = ?")
        .bind(&email)
        .fetch_optional(&state.db)
        .await
        .map_err(|e| {
            error!(
                error = %e,
                email = %safe_email_log(&email),
                "Database error during role inspection"
            );
            ApiError::DatabaseError(e)
        })?;

    Ok(Json(AdminStatusResponse {
        admin: role.as_deref() == Some("admin"),
    }))
}

/// DELETE /api/users/:id - Delete a user record
///
/// Deleting an absent id is a no-op (`deleted: 0`), not an error.
pub async fn delete_user(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    admin: AdminUser,
    Path(user_id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(&user_id)
        .execute(&state.db)
        .await
        .map_err(|e| {
            error!(error = %e, target_user_id = %user_id, "Database error deleting user");
            ApiError::DatabaseError(e)
        })?;

    info!(
        admin_email = %safe_email_log(&admin.email),
        target_user_id = %user_id,
        deleted = result.rows_affected(),
        "User delete processed"
    );

    Ok(Json(DeleteResponse {
        deleted: result.rows_affected(),
    }))
}
