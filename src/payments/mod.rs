//! # Payments Module
//!
//! Charge authorization and the checkout sequence:
//! - standalone payment-intent creation for client confirmation flows
//! - the three-step checkout (authorize, record, clear) with independent
//!   step reporting and a compensating-action recovery path

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;


pub use routes::payments_routes;
