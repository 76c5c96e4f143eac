//! Event table repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use guestlist_core::error::AppError;
use guestlist_core::result::AppResult;
use guestlist_entity::table::EventTable;

use super::{decode_rows, translate_error};
use crate::store::TableStore;

/// Repository for event tables.
#[derive(Debug, Clone)]
pub struct TableRepository {
    pool: PgPool,
}

impl TableRepository {
    /// Create a new table repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TableStore for TableRepository {
    async fn list_all(&self) -> AppResult<Vec<EventTable>> {
        let rows = sqlx::query(
            "SELECT id, capacity, created_at, updated_at FROM event_table ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| translate_error(e, "tables", "", None))?;

        Ok(decode_rows(&rows, "event table"))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<EventTable>> {
        sqlx::query_as::<_, EventTable>(
            "SELECT id, capacity, created_at, updated_at FROM event_table WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| translate_error(e, "table", "tableID", Some(&id.to_string())))
    }

    async fn insert(&self, capacity: i32) -> AppResult<EventTable> {
        sqlx::query_as::<_, EventTable>(
            "INSERT INTO event_table (capacity) VALUES ($1) \
             RETURNING id, capacity, created_at, updated_at",
        )
        .bind(capacity)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_check_violation() => {
                AppError::bad_input(format!("capacity {capacity}"))
            }
            _ => translate_error(e, "table", "", None),
        })
    }
}
