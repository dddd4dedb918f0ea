//! User registry request/response models
//!
//! The `User` row model itself lives in the auth module since the
//! authorization gate reads it too.

use serde::{Deserialize, Serialize};

/// Request body for user registration (insert-if-absent)
#[derive(Debug, Deserialize)]
pub struct RegisterUserRequest {
    pub name: Option<String>,
}

/// Generic message response
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Response for the role-inspection route
#[derive(Serialize)]
pub struct AdminStatusResponse {
    pub admin: bool,
}

/// Response for delete operations; `deleted` may be zero (no-op)
#[derive(Serialize)]
pub struct DeleteResponse {
    pub deleted: u64,
}
