//! # Auth Module
//!
//! This module handles all authentication-related functionality including:
//! - Session token issuance and verification (HS256, one-hour lifetime)
//! - AuthedUser extractor for protected routes
//! - AdminUser extractor layering a database-backed role check on top
//! - Per-resource ownership checks

pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod tokens;

#[cfg(test)]
mod tests;

pub use extractors::{ensure_owner, AdminUser, AuthedUser};
pub use models::User;
pub use routes::auth_routes;
