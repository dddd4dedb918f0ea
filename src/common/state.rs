// Application state shared across all modules

use reqwest::Client;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::auth::tokens::TokenIssuer;
use crate::services::ChargeAuthorizer;

/// Application state containing the database pool, the session token issuer
/// and the external charge-authorization collaborator
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub http: Client,
    pub tokens: TokenIssuer,
    pub charge: Arc<dyn ChargeAuthorizer>,
}
