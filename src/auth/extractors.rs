//! Authentication extractors for Axum

use async_trait::async_trait;
use axum::{
    extract::{Extension, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, warn};

use crate::common::{safe_email_log, ApiError, AppState};

/// Authenticated caller extractor
///
/// Validates the bearer token and attaches the decoded identity claim to
/// the request. No database access happens here; role checks are layered
/// on top by [`AdminUser`].
#[derive(Debug)]
pub struct AuthedUser {
    pub email: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Extension containing the AppState
        let Extension(state_lock): Extension<Arc<RwLock<AppState>>> =
            Extension::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::InternalServer("missing app state".to_string()))?;

        let app_state = state_lock.read().await.clone();

        // Extract Bearer token from Authorization header
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_string());

        let header = match header {
            Some(h) => h,
            None => {
                warn!("Authentication failed: missing Authorization header");
                return Err(ApiError::Unauthorized("unauthorized access".to_string()));
            }
        };

        // Handle "Bearer <token>" format or raw token
        let token = header.strip_prefix("Bearer ").unwrap_or(&header);

        let claims = app_state.tokens.verify(token)?;

        debug!(
            email = %safe_email_log(&claims.email),
            "Caller authenticated via bearer token"
        );

        Ok(AuthedUser {
            email: claims.email,
        })
    }
}

/// Administrator extractor
///
/// Authenticates the caller first, then looks the claim email up in the
/// users table. A missing record or any stored role other than 'admin' is
/// rejected before the handler runs.
#[derive(Debug)]
pub struct AdminUser {
    pub email: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let authed = AuthedUser::from_request_parts(parts, state).await?;

        let Extension(state_lock): Extension<Arc<RwLock<AppState>>> =
            Extension::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::InternalServer("missing app state".to_string()))?;

        let app_state = state_lock.read().await.clone();

        let role: Option<String> = sqlx::query_scalar("SELECT role FROM users WHERE email = ?")
            .bind(&authed.email)
            .fetch_optional(&app_state.db)
            .await
            .map_err(|e| {
                error!(
                    error = %e,
                    email = %safe_email_log(&authed.email),
                    "Database error during role lookup"
                );
                ApiError::DatabaseError(e)
            })?;

        match role.as_deref() {
            Some("admin") => Ok(AdminUser {
                email: authed.email,
            }),
            _ => {
                warn!(
                    email = %safe_email_log(&authed.email),
                    "Authorization failed: admin role required"
                );
                Err(ApiError::Forbidden("forbidden access".to_string()))
            }
        }
    }
}

/// Per-resource ownership predicate
///
/// The email a route operates on must equal the authenticated claim email.
pub fn ensure_owner(authed: &AuthedUser, email: &str) -> Result<(), ApiError> {
    if authed.email != email {
        warn!(
            claim_email = %safe_email_log(&authed.email),
            requested_email = %safe_email_log(email),
            "Authorization failed: ownership mismatch"
        );
        return Err(ApiError::Forbidden("forbidden access".to_string()));
    }
    Ok(())
}
