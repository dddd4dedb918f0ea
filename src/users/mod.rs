//! # Users Module
//!
//! This module handles the user registry:
//! - Registration (insert-if-absent, role starts as 'none')
//! - Role promotion and role inspection
//! - Administrative listing and deletion

pub mod handlers;
pub mod models;
pub mod routes;

#[cfg(test)]
mod tests;

pub use routes::users_routes;
