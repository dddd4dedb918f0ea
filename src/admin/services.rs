//! Dashboard aggregation queries
//!
//! Everything here is recomputed in full on each call; there is no
//! incremental cache and no read-your-writes guarantee across the
//! individual queries.

use sqlx::SqlitePool;
use tracing::error;

use super::models::{CategorySpend, DashboardStats};
use crate::common::ApiError;

pub struct StatsService {
    db: SqlitePool,
}

impl StatsService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Row counts plus total revenue across all payments
    pub async fn summary(&self) -> Result<DashboardStats, ApiError> {
        let user = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.db)
            .await
            .map_err(|e| {
                error!(error = %e, "Database error counting users");
                ApiError::DatabaseError(e)
            })?;

        let product = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM menu_items")
            .fetch_one(&self.db)
            .await
            .map_err(|e| {
                error!(error = %e, "Database error counting menu items");
                ApiError::DatabaseError(e)
            })?;

        let orders = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM payments")
            .fetch_one(&self.db)
            .await
            .map_err(|e| {
                error!(error = %e, "Database error counting payments");
                ApiError::DatabaseError(e)
            })?;

        let revenue = sqlx::query_scalar::<_, f64>("SELECT COALESCE(SUM(price), 0.0) FROM payments")
            .fetch_one(&self.db)
            .await
            .map_err(|e| {
                error!(error = %e, "Database error summing revenue");
                ApiError::DatabaseError(e)
            })?;

        Ok(DashboardStats {
            user,
            product,
            orders,
            revenue,
        })
    }

    /// Per-category spend over all purchased lines
    ///
    /// Categories nobody has purchased from are absent, not zero: this is a
    /// projection of the payment lines, not an enumeration of the menu.
    pub async fn category_breakdown(&self) -> Result<Vec<CategorySpend>, ApiError> {
        let rows = sqlx::query_as::<_, (String, f64)>(
            r#"
            SELECT m.category, SUM(m.price) as total
            FROM payment_items pi
            JOIN menu_items m ON m.id = pi.menu_item_id
            GROUP BY m.category
            ORDER BY m.category
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error aggregating category spend");
            ApiError::DatabaseError(e)
        })?;

        Ok(rows
            .into_iter()
            .map(|(category, total)| CategorySpend { category, total })
            .collect())
    }
}
