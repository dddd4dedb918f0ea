//! Payment handlers

use axum::{extract::Extension, Json};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use super::models::{CheckoutRequest, CheckoutResponse, CreateIntentRequest, CreateIntentResponse};
use super::services::{to_minor_units, CheckoutService};
use crate::auth::AuthedUser;
use crate::common::{safe_email_log, ApiError, AppState};

/// POST /api/payments/intent - Authorize a charge without recording anything
///
/// Used by client-side confirmation flows: the returned secret lets the
/// frontend confirm the charge directly with the provider.
///
/// # Request Body
/// ```json
/// { "price": 12.5 }
/// ```
///
/// # Response
/// ```json
/// { "clientSecret": "pi_..._secret_..." }
/// ```
pub async fn create_payment_intent(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(request): Json<CreateIntentRequest>,
) -> Result<Json<CreateIntentResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let amount_minor = to_minor_units(request.price)?;
    let authorization = state.charge.authorize(amount_minor).await?;

    info!(
        email = %safe_email_log(&authed.email),
        amount_minor,
        "Payment intent created"
    );

    Ok(Json(CreateIntentResponse {
        client_secret: authorization.client_secret,
    }))
}

/// POST /api/payments - Run the checkout sequence
///
/// Authorizes the charge, records the payment, then clears the purchased
/// cart lines. The response reports the payment and the cart-clear outcome
/// independently; a failed clear leaves the payment in place and can be
/// retried by deleting the listed lines again.
pub async fn checkout(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(request): Json<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let service = CheckoutService::new(state.db.clone(), state.charge.clone());
    let outcome = service.checkout(&authed.email, request).await?;

    Ok(Json(CheckoutResponse {
        client_secret: outcome.client_secret,
        payment: outcome.payment,
        cart: outcome.cart,
    }))
}
