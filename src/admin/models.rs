//! Admin dashboard models

use serde::Serialize;

/// Aggregate totals for the admin dashboard
///
/// Counts are snapshots taken by separate queries; under concurrent writes
/// they may be mutually stale. `revenue` is an exact sum over all payment
/// records at the time of its query.
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub user: i64,
    pub product: i64,
    pub orders: i64,
    pub revenue: f64,
}

/// Total spend for one menu category
#[derive(Debug, Serialize)]
pub struct CategorySpend {
    pub category: String,
    pub total: f64,
}
