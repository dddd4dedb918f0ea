//! Review handlers

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

use super::models::{CreateReviewRequest, Review};
use crate::auth::AuthedUser;
use crate::common::{generate_review_id, safe_email_log, ApiError, AppState};

/// GET /api/reviews - List all customer reviews (public)
pub async fn get_reviews(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
) -> Result<Json<Vec<Review>>, ApiError> {
    let state = state_lock.read().await.clone();

    let reviews = sqlx::query_as::<_, Review>("SELECT * FROM reviews ORDER BY created_at DESC")
        .fetch_all(&state.db)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error fetching reviews");
            ApiError::DatabaseError(e)
        })?;

    Ok(Json(reviews))
}

/// POST /api/reviews - Post a customer review
pub async fn create_review(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(request): Json<CreateReviewRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if request.name.trim().is_empty() || request.details.trim().is_empty() {
        return Err(ApiError::ValidationError(
            "name and details are required".to_string(),
        ));
    }
    if !request.rating.is_finite() || !(0.0..=5.0).contains(&request.rating) {
        return Err(ApiError::ValidationError(
            "rating must be between 0 and 5".to_string(),
        ));
    }

    let state = state_lock.read().await.clone();

    let id = generate_review_id();
    sqlx::query("INSERT INTO reviews (id, name, details, rating) VALUES (?, ?, ?, ?)")
        .bind(&id)
        .bind(&request.name)
        .bind(&request.details)
        .bind(request.rating)
        .execute(&state.db)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error inserting review");
            ApiError::DatabaseError(e)
        })?;

    let review = sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE id = ?")
        .bind(&id)
        .fetch_one(&state.db)
        .await
        .map_err(|e| {
            error!(error = %e, review_id = %id, "Database error fetching new review");
            ApiError::DatabaseError(e)
        })?;

    info!(
        email = %safe_email_log(&authed.email),
        review_id = %review.id,
        rating = review.rating,
        "Review posted"
    );

    Ok((StatusCode::CREATED, Json(review)))
}
