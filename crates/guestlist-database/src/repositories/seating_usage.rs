//! Seat usage queries over the `seating_usage` view.

use async_trait::async_trait;
use sqlx::PgPool;

use guestlist_core::result::AppResult;

use super::translate_error;
use crate::store::CapacityView;

/// Reads free-seat counts from the `seating_usage` view.
#[derive(Debug, Clone)]
pub struct SeatingUsageRepository {
    pool: PgPool,
}

impl SeatingUsageRepository {
    /// Create a new seat usage repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CapacityView for SeatingUsageRepository {
    async fn free_seats_at_table(&self, table_id: i64) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT free_seats FROM seating_usage WHERE table_id = $1")
            .bind(table_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| translate_error(e, "table", "tableID", Some(&table_id.to_string())))
    }

    async fn free_seats_for_guest(&self, name: &str) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT u.free_seats \
             FROM seating_usage AS u \
             JOIN seating AS s ON s.table_id = u.table_id \
             JOIN guest AS g ON g.id = s.guest_id \
             WHERE g.name = $1",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| translate_error(e, "guest", "name", Some(name)))
    }

    async fn total_free_seats(&self) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COALESCE(SUM(free_seats), 0)::BIGINT FROM seating_usage")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| translate_error(e, "free seats", "", None))
    }
}
