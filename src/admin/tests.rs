//! Tests for admin module
//!
//! These tests verify the dashboard aggregations over seeded data:
//! - revenue is an exact sum over payment records
//! - the category breakdown sums purchased lines and omits untouched
//!   categories

#[cfg(test)]
mod tests {
    use super::super::services::StatsService;
    use crate::common::migrations;
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;

    async fn memory_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("failed to open in-memory database");
        migrations::run_migrations(&pool).await.expect("migrations failed");
        pool
    }

    async fn seed_menu_item(pool: &SqlitePool, id: &str, category: &str, price: f64) {
        sqlx::query("INSERT INTO menu_items (id, name, category, price) VALUES (?, 'Seeded', ?, ?)")
            .bind(id)
            .bind(category)
            .bind(price)
            .execute(pool)
            .await
            .expect("failed to seed menu item");
    }

    async fn seed_payment(pool: &SqlitePool, id: &str, price: f64, menu_ids: &[&str]) {
        sqlx::query("INSERT INTO payments (id, user_email, price) VALUES (?, 'guest@example.com', ?)")
            .bind(id)
            .bind(price)
            .execute(pool)
            .await
            .expect("failed to seed payment");

        for (idx, menu_id) in menu_ids.iter().enumerate() {
            sqlx::query(
                "INSERT INTO payment_items (payment_id, cart_item_id, menu_item_id) VALUES (?, ?, ?)",
            )
            .bind(id)
            .bind(format!("C_{}{}", id, idx))
            .bind(menu_id)
            .execute(pool)
            .await
            .expect("failed to seed payment line");
        }
    }

    #[tokio::test]
    async fn test_summary_counts_and_revenue() {
        let pool = memory_pool().await;

        sqlx::query("INSERT INTO users (id, email, role) VALUES ('U_1', 'a@example.com', 'none')")
            .execute(&pool)
            .await
            .unwrap();
        seed_menu_item(&pool, "M_1", "dessert", 6.5).await;
        seed_menu_item(&pool, "M_2", "soup", 4.0).await;
        seed_payment(&pool, "P_1", 10.5, &["M_1"]).await;
        seed_payment(&pool, "P_2", 4.0, &["M_2"]).await;

        let stats = StatsService::new(pool.clone())
            .summary()
            .await
            .expect("summary failed");

        assert_eq!(stats.user, 1);
        assert_eq!(stats.product, 2);
        assert_eq!(stats.orders, 2);
        assert!((stats.revenue - 14.5).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_summary_over_empty_database_is_zero() {
        let pool = memory_pool().await;

        let stats = StatsService::new(pool.clone())
            .summary()
            .await
            .expect("summary failed");

        assert_eq!(stats.orders, 0);
        assert_eq!(stats.revenue, 0.0);
    }

    #[tokio::test]
    async fn test_category_breakdown_over_no_payments_is_empty() {
        let pool = memory_pool().await;
        // A menu category exists, but nothing was purchased from it
        seed_menu_item(&pool, "M_1", "dessert", 6.5).await;

        let breakdown = StatsService::new(pool.clone())
            .category_breakdown()
            .await
            .expect("breakdown failed");

        assert!(breakdown.is_empty());
    }

    #[tokio::test]
    async fn test_category_breakdown_sums_shared_category() {
        let pool = memory_pool().await;
        seed_menu_item(&pool, "M_1", "dessert", 6.5).await;
        seed_menu_item(&pool, "M_2", "dessert", 3.5).await;
        seed_menu_item(&pool, "M_3", "soup", 4.0).await;

        // Two payments both touch dessert; soup is purchased once
        seed_payment(&pool, "P_1", 6.5, &["M_1"]).await;
        seed_payment(&pool, "P_2", 7.5, &["M_2", "M_3"]).await;

        let breakdown = StatsService::new(pool.clone())
            .category_breakdown()
            .await
            .expect("breakdown failed");

        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].category, "dessert");
        assert!((breakdown[0].total - 10.0).abs() < f64::EPSILON);
        assert_eq!(breakdown[1].category, "soup");
        assert!((breakdown[1].total - 4.0).abs() < f64::EPSILON);
    }
}
