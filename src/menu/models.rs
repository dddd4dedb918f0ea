//! Menu data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Menu item database model
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub recipe: Option<String>,
    pub image: Option<String>,
    pub created_at: Option<String>,
}

/// Request body for creating a menu item
#[derive(Debug, Deserialize)]
pub struct CreateMenuItemRequest {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub recipe: Option<String>,
    pub image: Option<String>,
}

/// Response for delete operations; `deleted` may be zero (no-op)
#[derive(Serialize)]
pub struct DeleteResponse {
    pub deleted: u64,
}
