//! Session token issuance and verification

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::warn;

use super::models::Claims;
use crate::common::ApiError;

/// Lifetime of an issued session token, in seconds
const TOKEN_TTL: i64 = 3600;

/// Signs and verifies session tokens with a process-wide secret.
///
/// The secret is loaded once at startup; rotating it invalidates every
/// previously issued token. There is no key versioning.
#[derive(Clone)]
pub struct TokenIssuer {
    secret: String,
}

impl TokenIssuer {
    pub fn new(secret: String) -> Self {
        Self { secret }
    }

    /// Sign a claim for `email`, valid for one hour
    pub fn issue(&self, email: &str) -> Result<String, ApiError> {
        let iat = Utc::now().timestamp();
        let claims = Claims {
            email: email.to_string(),
            iat: iat as usize,
            exp: (iat + TOKEN_TTL) as usize,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| {
            warn!(error = %e, "JWT encoding failed");
            ApiError::InternalServer("token signing failed".to_string())
        })
    }

    /// Verify a token and return the claims it carries.
    ///
    /// An expired token fails exactly like a tampered or malformed one; the
    /// caller cannot distinguish the cases.
    pub fn verify(&self, token: &str) -> Result<Claims, ApiError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map(|data| data.claims)
        .map_err(|e| {
            warn!(error = %e, "JWT token validation failed");
            ApiError::Unauthorized("unauthorized access".to_string())
        })
    }
}
