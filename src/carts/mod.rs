//! # Carts Module
//!
//! Per-user shopping cart: listing, adding and removing lines. Bulk
//! removal at checkout is owned by the payments module.

pub mod handlers;
pub mod models;
pub mod routes;


pub use routes::carts_routes;
