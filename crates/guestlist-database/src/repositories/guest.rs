//! Guest repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use guestlist_core::error::AppError;
use guestlist_core::result::AppResult;
use guestlist_entity::guest::{Guest, GuestArrival, GuestListing, GuestStatus, NewGuest};

use super::{decode_rows, translate_error};
use crate::store::GuestStore;

const GUEST_COLUMNS: &str =
    "id, name, entourage, arrival_status, arrived_at, created_at, updated_at";

/// Repository for guest rows and their seating.
#[derive(Debug, Clone)]
pub struct GuestRepository {
    pool: PgPool,
}

impl GuestRepository {
    /// Create a new guest repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GuestStore for GuestRepository {
    async fn list_all(&self) -> AppResult<Vec<GuestListing>> {
        let rows = sqlx::query(
            "SELECT g.name, s.table_id, g.entourage \
             FROM guest AS g \
             JOIN seating AS s ON s.guest_id = g.id \
             ORDER BY g.id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| translate_error(e, "guest list", "", None))?;

        Ok(decode_rows(&rows, "guest listing"))
    }

    async fn list_by_statuses(&self, statuses: &[GuestStatus]) -> AppResult<Vec<GuestArrival>> {
        let rows = sqlx::query(
            "SELECT name, entourage, arrived_at \
             FROM guest \
             WHERE arrival_status = ANY($1) \
             ORDER BY arrived_at NULLS LAST, id",
        )
        .bind(statuses.to_vec())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| translate_error(e, "arrived guests", "", None))?;

        Ok(decode_rows(&rows, "guest arrival"))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Guest>> {
        sqlx::query_as::<_, Guest>(&format!("SELECT {GUEST_COLUMNS} FROM guest WHERE name = $1"))
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| translate_error(e, "guest", "name", Some(name)))
    }

    async fn insert(&self, data: &NewGuest) -> AppResult<Guest> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| translate_error(e, "guest", "name", Some(&data.name)))?;

        let guest = sqlx::query_as::<_, Guest>(&format!(
            "INSERT INTO guest (name, entourage) VALUES ($1, $2) RETURNING {GUEST_COLUMNS}"
        ))
        .bind(&data.name)
        .bind(data.entourage)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| translate_error(e, "guest", "name", Some(&data.name)))?;

        sqlx::query("INSERT INTO seating (guest_id, table_id) VALUES ($1, $2)")
            .bind(guest.id)
            .bind(data.table_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                    AppError::not_found("table", "tableID", data.table_id)
                }
                _ => translate_error(e, "seating", "guestID", Some(&guest.id.to_string())),
            })?;

        tx.commit()
            .await
            .map_err(|e| translate_error(e, "guest", "name", Some(&data.name)))?;

        debug!(guest_id = guest.id, table_id = data.table_id, "Guest row and seating inserted");
        Ok(guest)
    }

    async fn update_full(&self, guest: &Guest) -> AppResult<Guest> {
        let id = guest.id.to_string();
        sqlx::query_as::<_, Guest>(&format!(
            "UPDATE guest \
             SET entourage = $2, arrival_status = $3, arrived_at = $4, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {GUEST_COLUMNS}"
        ))
        .bind(guest.id)
        .bind(guest.entourage)
        .bind(guest.arrival_status)
        .bind(guest.arrived_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| translate_error(e, "guest", "guestID", Some(&id)))?
        .ok_or_else(|| AppError::not_found("guest", "guestID", id))
    }

    async fn transition_status(
        &self,
        name: &str,
        from: GuestStatus,
        to: GuestStatus,
    ) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE guest SET arrival_status = $3, updated_at = NOW() \
             WHERE name = $1 AND arrival_status = $2",
        )
        .bind(name)
        .bind(from)
        .bind(to)
        .execute(&self.pool)
        .await
        .map_err(|e| translate_error(e, "guest", "name", Some(name)))?;

        Ok(result.rows_affected())
    }
}
