//! Review data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Customer review database model
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Review {
    pub id: String,
    pub name: String,
    pub details: String,
    pub rating: f64,
    pub created_at: Option<String>,
}

/// Request body for posting a review
#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub name: String,
    pub details: String,
    pub rating: f64,
}
