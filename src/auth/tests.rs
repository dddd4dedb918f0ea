//! Tests for auth module
//!
//! These tests verify core authentication functionality including:
//! - Token issuance and verification round-trips
//! - Expiry and signature rejection
//! - The ownership predicate

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::common::ApiError;
    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
    use tokens::TokenIssuer;

    #[test]
    fn test_issue_verify_round_trip() {
        let issuer = TokenIssuer::new("test_secret_key".to_string());

        let token = issuer.issue("guest@example.com").expect("issue failed");
        let claims = issuer.verify(&token).expect("verify failed");

        assert_eq!(claims.email, "guest@example.com");
        assert_eq!(claims.exp, claims.iat + 3600);
    }

    #[test]
    fn test_verify_fails_with_wrong_secret() {
        let issuer = TokenIssuer::new("test_secret_key".to_string());
        let other = TokenIssuer::new("a_different_secret".to_string());

        let token = issuer.issue("guest@example.com").expect("issue failed");
        let result = other.verify(&token);

        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }

    #[test]
    fn test_verify_fails_for_expired_token() {
        // A well-formed signature over an expired claim must be rejected
        let secret = "test_secret_key";
        let claims = models::Claims {
            email: "guest@example.com".to_string(),
            iat: 1_000_000,
            exp: 1_003_600, // long past, far outside any leeway
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("Failed to encode token");

        let issuer = TokenIssuer::new(secret.to_string());
        let result = issuer.verify(&token);

        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }

    #[test]
    fn test_verify_fails_for_malformed_token() {
        let issuer = TokenIssuer::new("test_secret_key".to_string());

        assert!(matches!(
            issuer.verify("not-a-token"),
            Err(ApiError::Unauthorized(_))
        ));
        assert!(matches!(issuer.verify(""), Err(ApiError::Unauthorized(_))));
    }

    #[test]
    fn test_ensure_owner_accepts_matching_email() {
        let authed = extractors::AuthedUser {
            email: "guest@example.com".to_string(),
        };

        assert!(extractors::ensure_owner(&authed, "guest@example.com").is_ok());
    }

    #[test]
    fn test_ensure_owner_rejects_other_email() {
        let authed = extractors::AuthedUser {
            email: "guest@example.com".to_string(),
        };

        let result = extractors::ensure_owner(&authed, "someone-else@example.com");
        assert!(matches!(result, Err(ApiError::Forbidden(_))));
    }
}
