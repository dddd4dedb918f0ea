//! Checkout orchestration
//!
//! Checkout spans two independent tables plus an external collaborator and
//! deliberately uses no cross-store transaction:
//!
//! 1. authorize the charge - terminal on failure, nothing is written
//! 2. record the payment   - terminal on failure, cart untouched
//! 3. clear the cart lines - failure never rolls back step 2
//!
//! The outcome reports steps 2 and 3 independently so a caller can detect a
//! partial result and retry the clear; deleting an already-deleted line is
//! a no-op.

use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{error, info, warn};

use super::models::{CartClearOutcome, CheckoutRequest, Payment};
use crate::common::{generate_payment_id, safe_email_log, ApiError};
use crate::services::ChargeAuthorizer;

/// Convert a decimal price into smallest-currency units
pub fn to_minor_units(price: f64) -> Result<i64, ApiError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ApiError::ValidationError(
            "price must be a non-negative number".to_string(),
        ));
    }
    Ok((price * 100.0).round() as i64)
}

/// Result of a checkout whose charge was authorized and payment recorded.
/// The cart-clear step may still have failed; see [`CartClearOutcome`].
#[derive(Debug)]
pub struct CheckoutOutcome {
    pub payment: Payment,
    pub client_secret: String,
    pub cart: CartClearOutcome,
}

pub struct CheckoutService {
    db: SqlitePool,
    charge: Arc<dyn ChargeAuthorizer>,
}

impl CheckoutService {
    pub fn new(db: SqlitePool, charge: Arc<dyn ChargeAuthorizer>) -> Self {
        Self { db, charge }
    }

    /// Run the checkout sequence for `user_email`.
    ///
    /// Concurrent checkouts over overlapping cart lines are not serialized;
    /// each step is individually safe to retry or report instead.
    pub async fn checkout(
        &self,
        user_email: &str,
        request: CheckoutRequest,
    ) -> Result<CheckoutOutcome, ApiError> {
        let amount_minor = to_minor_units(request.price)?;

        if request.cart_item_ids.is_empty() {
            return Err(ApiError::ValidationError(
                "cart_item_ids must not be empty".to_string(),
            ));
        }

        info!(
            email = %safe_email_log(user_email),
            amount_minor,
            lines = request.cart_item_ids.len(),
            "Checkout: authorizing charge"
        );
        let authorization = self.charge.authorize(amount_minor).await?;

        let payment = self.record_payment(user_email, &request).await?;
        info!(
            email = %safe_email_log(user_email),
            payment_id = %payment.id,
            "Checkout: payment recorded"
        );

        let cart = match self.clear_cart_lines(&request.cart_item_ids).await {
            Ok(removed) => {
                info!(payment_id = %payment.id, removed, "Checkout: cart cleared");
                CartClearOutcome {
                    cleared: true,
                    removed,
                    error: None,
                }
            }
            Err(e) => {
                warn!(
                    payment_id = %payment.id,
                    error = %e,
                    "Checkout: cart clear failed; payment retained for reconciliation"
                );
                CartClearOutcome {
                    cleared: false,
                    removed: 0,
                    error: Some(e.to_string()),
                }
            }
        };

        Ok(CheckoutOutcome {
            payment,
            client_secret: authorization.client_secret,
            cart,
        })
    }

    /// Insert the payment row together with its purchased line references.
    /// Both live in the payments store, so one transaction covers them.
    async fn record_payment(
        &self,
        user_email: &str,
        request: &CheckoutRequest,
    ) -> Result<Payment, ApiError> {
        let payment_id = generate_payment_id();

        let mut tx = self.db.begin().await.map_err(|e| {
            error!(error = %e, "Database error starting payment transaction");
            ApiError::DatabaseError(e)
        })?;

        sqlx::query("INSERT INTO payments (id, user_email, price) VALUES (?, ?, ?)")
            .bind(&payment_id)
            .bind(user_email)
            .bind(request.price)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!(error = %e, payment_id = %payment_id, "Database error inserting payment");
                ApiError::DatabaseError(e)
            })?;

        for (idx, cart_item_id) in request.cart_item_ids.iter().enumerate() {
            let menu_item_id = request.menu_item_ids.get(idx).map(String::as_str);
            sqlx::query(
                "INSERT INTO payment_items (payment_id, cart_item_id, menu_item_id) VALUES (?, ?, ?)",
            )
            .bind(&payment_id)
            .bind(cart_item_id)
            .bind(menu_item_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!(
                    error = %e,
                    payment_id = %payment_id,
                    cart_item_id = %cart_item_id,
                    "Database error inserting payment line"
                );
                ApiError::DatabaseError(e)
            })?;
        }

        tx.commit().await.map_err(|e| {
            error!(error = %e, payment_id = %payment_id, "Database error committing payment");
            ApiError::DatabaseError(e)
        })?;

        let payment = sqlx::query_as::<_, Payment>("SELECT * FROM payments WHERE id = ?")
            .bind(&payment_id)
            .fetch_one(&self.db)
            .await
            .map_err(|e| {
                error!(error = %e, payment_id = %payment_id, "Database error fetching payment");
                ApiError::DatabaseError(e)
            })?;

        Ok(payment)
    }

    /// Delete the given cart lines in bulk.
    ///
    /// Ids that no longer exist are skipped silently, so a retry after a
    /// partial checkout cannot error or double-delete.
    pub async fn clear_cart_lines(&self, cart_item_ids: &[String]) -> Result<u64, ApiError> {
        if cart_item_ids.is_empty() {
            return Ok(0);
        }

        let placeholders = vec!["?"; cart_item_ids.len()].join(", ");
        let sql = format!("DELETE FROM cart_items WHERE id IN ({})", placeholders);

        let mut query = sqlx::query(&sql);
        for id in cart_item_ids {
            query = query.bind(id);
        }

        let result = query.execute(&self.db).await.map_err(|e| {
            error!(error = %e, "Database error clearing cart lines");
            ApiError::DatabaseError(e)
        })?;

        Ok(result.rows_affected())
    }
}
