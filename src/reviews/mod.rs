//! # Reviews Module
//!
//! Public review listing; posting requires an authenticated session.

pub mod handlers;
pub mod models;
pub mod routes;

pub use routes::reviews_routes;
