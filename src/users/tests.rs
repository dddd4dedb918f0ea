//! Tests for users module
//!
//! These tests verify the authorization gate against stored roles and the
//! no-op semantics of user deletion:
//! - AdminUser accepts a stored 'admin' role and rejects everything else
//! - Missing bearer credentials are rejected before any database access
//! - Deleting an absent user affects zero rows

#[cfg(test)]
mod tests {
    use crate::auth::tokens::TokenIssuer;
    use crate::auth::{AdminUser, AuthedUser};
    use crate::common::{migrations, ApiError, AppState};
    use crate::services::stripe::mock::MockChargeAuthorizer;
    use axum::extract::FromRequestParts;
    use axum::http::{request::Parts, Request};
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    const TEST_SECRET: &str = "test_secret_key";

    async fn test_state() -> (Arc<RwLock<AppState>>, SqlitePool) {
        // Single connection so every query sees the same in-memory database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("failed to open in-memory database");
        migrations::run_migrations(&pool).await.expect("migrations failed");

        let state = AppState {
            db: pool.clone(),
            http: reqwest::Client::new(),
            tokens: TokenIssuer::new(TEST_SECRET.to_string()),
            charge: Arc::new(MockChargeAuthorizer::approving()),
        };
        (Arc::new(RwLock::new(state)), pool)
    }

    async fn insert_user(pool: &SqlitePool, id: &str, email: &str, role: &str) {
        sqlx::query("INSERT INTO users (id, email, role) VALUES (?, ?, ?)")
            .bind(id)
            .bind(email)
            .bind(role)
            .execute(pool)
            .await
            .expect("failed to insert user");
    }

    fn request_parts(state: Arc<RwLock<AppState>>, bearer: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/");
        if let Some(token) = bearer {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }
        let mut request = builder.body(()).expect("failed to build request");
        request.extensions_mut().insert(state);
        request.into_parts().0
    }

    #[tokio::test]
    async fn test_admin_extractor_accepts_stored_admin_role() {
        let (state, pool) = test_state().await;
        insert_user(&pool, "U_ADMIN1", "boss@example.com", "admin").await;

        let token = state
            .read()
            .await
            .tokens
            .issue("boss@example.com")
            .expect("issue failed");

        let mut parts = request_parts(state, Some(&token));
        let admin = AdminUser::from_request_parts(&mut parts, &())
            .await
            .expect("admin extractor should accept stored admin role");

        assert_eq!(admin.email, "boss@example.com");
    }

    #[tokio::test]
    async fn test_admin_extractor_rejects_non_admin_role() {
        let (state, pool) = test_state().await;
        insert_user(&pool, "U_GUEST1", "guest@example.com", "none").await;

        let token = state
            .read()
            .await
            .tokens
            .issue("guest@example.com")
            .expect("issue failed");

        let mut parts = request_parts(state, Some(&token));
        let result = AdminUser::from_request_parts(&mut parts, &()).await;

        assert!(matches!(result, Err(ApiError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_admin_extractor_rejects_unknown_email() {
        let (state, _pool) = test_state().await;

        let token = state
            .read()
            .await
            .tokens
            .issue("stranger@example.com")
            .expect("issue failed");

        let mut parts = request_parts(state, Some(&token));
        let result = AdminUser::from_request_parts(&mut parts, &()).await;

        assert!(matches!(result, Err(ApiError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_missing_bearer_rejected_before_database_access() {
        // The users table is gone; a missing credential must still be
        // rejected as unauthenticated, proving no lookup was attempted.
        let (state, pool) = test_state().await;
        sqlx::query("DROP TABLE users")
            .execute(&pool)
            .await
            .expect("failed to drop table");

        let mut parts = request_parts(state.clone(), None);
        let result = AuthedUser::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(ApiError::Unauthorized(_))));

        let mut parts = request_parts(state, None);
        let result = AdminUser::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_expired_token_rejected_by_extractor() {
        use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

        let (state, pool) = test_state().await;
        insert_user(&pool, "U_ADMIN2", "boss@example.com", "admin").await;

        let claims = crate::auth::models::Claims {
            email: "boss@example.com".to_string(),
            iat: 1_000_000,
            exp: 1_003_600,
        };
        let stale = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .expect("Failed to encode token");

        let mut parts = request_parts(state, Some(&stale));
        let result = AdminUser::from_request_parts(&mut parts, &()).await;

        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_delete_absent_user_is_noop() {
        let (_state, pool) = test_state().await;

        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind("U_MISSING")
            .execute(&pool)
            .await
            .expect("delete should not error");

        assert_eq!(result.rows_affected(), 0);
    }
}
