//! Authentication handlers

use axum::extract::{Extension, Json};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use super::models::{TokenRequest, TokenResponse};
use crate::common::{safe_email_log, ApiError, AppState};

/// POST /api/auth/token
/// Issues a one-hour session token for the supplied identity.
///
/// The identity is expected to be pre-verified by the login flow sitting in
/// front of this service; this handler performs no credential check itself.
///
/// # Request Body
/// ```json
/// { "email": "guest@example.com" }
/// ```
///
/// # Response
/// ```json
/// { "token": "<jwt token>" }
/// ```
pub async fn issue_token(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(payload): Json<TokenRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let email = payload.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(ApiError::BadRequest("a valid email is required".to_string()));
    }

    let token = state.tokens.issue(email)?;

    info!(
        email = %safe_email_log(email),
        "Session token issued"
    );

    Ok(Json(TokenResponse { token }))
}
