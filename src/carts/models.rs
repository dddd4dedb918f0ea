//! Cart data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Cart line database model
///
/// A line belongs to exactly one user and is never shared; the owning email
/// comes from the authenticated claim, not the request body.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CartItem {
    pub id: String,
    pub user_email: String,
    pub menu_item_id: String,
    pub name: String,
    pub image: Option<String>,
    pub price: f64,
    pub created_at: Option<String>,
}

/// Request body for adding a menu item to the cart
#[derive(Debug, Deserialize)]
pub struct AddCartItemRequest {
    pub menu_item_id: String,
    pub name: String,
    pub image: Option<String>,
    pub price: f64,
}

/// Query parameters for the cart listing
#[derive(Debug, Deserialize)]
pub struct CartQuery {
    pub email: Option<String>,
}

/// Response for delete operations; `deleted` may be zero (no-op)
#[derive(Serialize)]
pub struct DeleteResponse {
    pub deleted: u64,
}
