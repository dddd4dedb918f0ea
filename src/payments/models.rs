//! Payment data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Payment record database model
///
/// Created exactly once per completed checkout and immutable afterwards;
/// no update or delete operation is exposed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Payment {
    pub id: String,
    pub user_email: String,
    pub price: f64,
    pub created_at: Option<String>,
}

/// Request body for the standalone authorization endpoint
#[derive(Debug, Deserialize)]
pub struct CreateIntentRequest {
    pub price: f64,
}

/// Response carrying the provider secret the frontend confirms with
#[derive(Serialize)]
pub struct CreateIntentResponse {
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}

/// Request body for checkout
///
/// `cart_item_ids` and `menu_item_ids` correspond index-wise: each cart
/// line is paired with the menu item it was added from.
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub price: f64,
    pub cart_item_ids: Vec<String>,
    pub menu_item_ids: Vec<String>,
}

/// Outcome of the cart-clear step, reported independently of the payment
#[derive(Debug, Serialize)]
pub struct CartClearOutcome {
    pub cleared: bool,
    pub removed: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Checkout response: the recorded payment plus the cart-clear outcome
#[derive(Serialize)]
pub struct CheckoutResponse {
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
    pub payment: Payment,
    pub cart: CartClearOutcome,
}
