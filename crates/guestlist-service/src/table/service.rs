//! Free-seat queries and table management.

use std::sync::Arc;

use tracing::info;

use guestlist_core::error::AppError;
use guestlist_core::result::AppResult;
use guestlist_database::store::{CapacityView, TableStore};
use guestlist_entity::table::EventTable;

use crate::validation::validate_capacity;

/// Answers how many seats remain, per table and across the event.
///
/// Holds no state of its own; every answer is re-derived from the stored
/// seating data.
#[derive(Clone)]
pub struct SeatingCapacityService {
    tables: Arc<dyn TableStore>,
    capacity: Arc<dyn CapacityView>,
}

impl SeatingCapacityService {
    /// Creates a new seating capacity service.
    pub fn new(tables: Arc<dyn TableStore>, capacity: Arc<dyn CapacityView>) -> Self {
        Self { tables, capacity }
    }

    /// Free seats at a table. Fails `NotFound` for an unknown table.
    pub async fn free_seats_at_table(&self, table_id: i64) -> AppResult<i64> {
        self.capacity.free_seats_at_table(table_id).await
    }

    /// Free seats at the table the named guest sits at, with the guest's
    /// own party counted as occupied while they hold seats.
    pub async fn free_seats_for_guest(&self, name: &str) -> AppResult<i64> {
        self.capacity.free_seats_for_guest(name).await
    }

    /// Free seats across all tables.
    pub async fn total_free_seats(&self) -> AppResult<i64> {
        self.capacity.total_free_seats().await
    }

    /// Lists all tables.
    pub async fn list_tables(&self) -> AppResult<Vec<EventTable>> {
        self.tables.list_all().await
    }

    /// Gets a table by id.
    pub async fn get_table(&self, id: i64) -> AppResult<EventTable> {
        self.tables
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("table", "tableID", id))
    }

    /// Creates a table with `capacity` seats.
    pub async fn create_table(&self, capacity: i32) -> AppResult<EventTable> {
        validate_capacity(capacity)?;

        let table = self.tables.insert(capacity).await?;
        info!(table_id = table.id, capacity, "Table created");
        Ok(table)
    }

    /// Deleting a table would require moving its guests to `allocate`;
    /// that workflow does not exist.
    pub async fn delete_table(&self, id: i64) -> AppResult<()> {
        Err(AppError::not_implemented(format!(
            "Deleting table {id} is not supported"
        )))
    }
}

#[cfg(test)]
mod tests {
    use guestlist_core::error::ErrorKind;
    use guestlist_database::{MemoryStore, Stores};

    use super::*;

    fn service() -> SeatingCapacityService {
        let stores = Stores::memory(MemoryStore::new());
        SeatingCapacityService::new(stores.tables, stores.capacity)
    }

    #[tokio::test]
    async fn test_create_and_get_table() {
        let svc = service();
        let created = svc.create_table(8).await.unwrap();

        let fetched = svc.get_table(created.id).await.unwrap();
        assert_eq!(fetched.capacity, 8);
        assert_eq!(svc.list_tables().await.unwrap().len(), 1);
        assert_eq!(svc.free_seats_at_table(created.id).await.unwrap(), 8);
    }

    #[tokio::test]
    async fn test_create_table_rejects_non_positive_capacity() {
        let svc = service();
        let err = svc.create_table(0).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::BadInput);
        assert!(svc.list_tables().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_table() {
        let svc = service();
        assert_eq!(svc.get_table(5).await.unwrap_err().kind, ErrorKind::NotFound);
        assert_eq!(
            svc.free_seats_at_table(5).await.unwrap_err().kind,
            ErrorKind::NotFound
        );
    }

    #[tokio::test]
    async fn test_total_free_seats_without_tables_is_zero() {
        let svc = service();
        assert_eq!(svc.total_free_seats().await.unwrap(), 0);

        svc.create_table(3).await.unwrap();
        svc.create_table(5).await.unwrap();
        assert_eq!(svc.total_free_seats().await.unwrap(), 8);
    }

    #[tokio::test]
    async fn test_delete_table_is_not_implemented() {
        let svc = service();
        let table = svc.create_table(2).await.unwrap();
        let err = svc.delete_table(table.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotImplemented);
        assert!(svc.get_table(table.id).await.is_ok());
    }
}
