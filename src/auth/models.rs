//! Authentication data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// JWT claims structure: the identity embedded in a signed session token.
/// Never persisted server-side.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Claims {
    pub email: String,
    pub iat: usize,
    pub exp: usize,
}

/// User database model
#[derive(FromRow, Serialize, Deserialize, Debug, Clone)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub role: String,
    pub created_at: Option<String>,
}

/// Request body for token issuance
#[derive(Deserialize)]
pub struct TokenRequest {
    pub email: String,
}

/// Response body for token issuance
#[derive(Serialize)]
pub struct TokenResponse {
    pub token: String,
}
