// src/services/stripe.rs
//
// Stripe payment-authorization service
//
// Wraps the PaymentIntents endpoint: a successful call authorizes a charge
// for a given amount and yields the client secret the frontend needs to
// confirm it. Capture is an external concern; nothing here moves money.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::common::ApiError;

const PAYMENT_INTENTS_URL: &str = "https://api.stripe.com/v1/payment_intents";

/// How long to wait on the provider before treating the attempt as declined
const AUTHORIZE_TIMEOUT: Duration = Duration::from_secs(15);

/// A successful charge authorization
#[derive(Debug, Clone)]
pub struct ChargeAuthorization {
    pub client_secret: String,
}

/// External collaborator that authorizes a monetary amount in
/// smallest-currency units.
///
/// Implementations are opaque to the checkout flow; a timeout is treated
/// identically to a decline.
#[async_trait]
pub trait ChargeAuthorizer: Send + Sync {
    async fn authorize(&self, amount_minor: i64) -> Result<ChargeAuthorization, ApiError>;
}

/// Stripe-backed implementation of [`ChargeAuthorizer`]
pub struct StripeService {
    http: Client,
    secret_key: String,
    currency: String,
}

impl StripeService {
    pub fn new(http: Client, secret_key: String, currency: String) -> Self {
        Self {
            http,
            secret_key,
            currency,
        }
    }
}

#[async_trait]
impl ChargeAuthorizer for StripeService {
    async fn authorize(&self, amount_minor: i64) -> Result<ChargeAuthorization, ApiError> {
        let params = [
            ("amount", amount_minor.to_string()),
            ("currency", self.currency.clone()),
            ("payment_method_types[]", "card".to_string()),
        ];

        let resp = self
            .http
            .post(PAYMENT_INTENTS_URL)
            .basic_auth(&self.secret_key, None::<&str>)
            .form(&params)
            .timeout(AUTHORIZE_TIMEOUT)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    warn!(amount_minor, "Charge authorization timed out");
                    ApiError::ChargeAuthorizationFailed(
                        "charge authorization timed out".to_string(),
                    )
                } else {
                    error!(error = %e, "HTTP error contacting payment provider");
                    ApiError::ChargeAuthorizationFailed(
                        "payment provider unreachable".to_string(),
                    )
                }
            })?;

        let status = resp.status();
        if !status.is_success() {
            warn!(
                http_status = %status,
                amount_minor,
                "Payment provider declined the authorization"
            );
            return Err(ApiError::ChargeAuthorizationFailed(format!(
                "payment provider returned {}",
                status
            )));
        }

        let body: serde_json::Value = resp.json().await.map_err(|e| {
            error!(error = %e, "Failed to parse payment provider response");
            ApiError::ChargeAuthorizationFailed(
                "malformed payment provider response".to_string(),
            )
        })?;

        let client_secret = body
            .get("client_secret")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| {
                error!("Payment provider response missing client_secret");
                ApiError::ChargeAuthorizationFailed(
                    "payment provider response missing client_secret".to_string(),
                )
            })?;

        info!(amount_minor, "Charge authorization succeeded");

        Ok(ChargeAuthorization { client_secret })
    }
}

#[cfg(test)]
pub mod mock {
    //! Network-free test double for the charge-authorization collaborator

    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    pub struct MockChargeAuthorizer {
        decline: bool,
        pub calls: AtomicUsize,
    }

    impl MockChargeAuthorizer {
        /// Authorizes every amount
        pub fn approving() -> Self {
            Self {
                decline: false,
                calls: AtomicUsize::new(0),
            }
        }

        /// Declines every amount
        pub fn declining() -> Self {
            Self {
                decline: true,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ChargeAuthorizer for MockChargeAuthorizer {
        async fn authorize(&self, amount_minor: i64) -> Result<ChargeAuthorization, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.decline {
                return Err(ApiError::ChargeAuthorizationFailed(
                    "card declined".to_string(),
                ));
            }
            Ok(ChargeAuthorization {
                client_secret: format!("pi_test_{}_secret", amount_minor),
            })
        }
    }
}
