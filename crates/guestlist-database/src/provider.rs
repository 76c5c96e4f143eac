//! Store bundle that dispatches to the configured provider.

use std::sync::Arc;

use tracing::info;

use guestlist_core::config::{DatabaseConfig, StoreProvider};
use guestlist_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::MemoryStore;
use crate::repositories::{GuestRepository, SeatingUsageRepository, TableRepository};
use crate::store::{CapacityView, GuestStore, TableStore};

/// The three store handles the services are built from.
///
/// The provider is selected at construction time based on configuration.
#[derive(Clone)]
pub struct Stores {
    /// Guest rows and seating.
    pub guests: Arc<dyn GuestStore>,
    /// Event tables.
    pub tables: Arc<dyn TableStore>,
    /// Seat usage.
    pub capacity: Arc<dyn CapacityView>,
    pool: Option<DatabasePool>,
}

impl std::fmt::Debug for Stores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stores")
            .field("provider", &self.provider())
            .finish()
    }
}

impl Stores {
    /// Build the stores for the configured provider.
    ///
    /// For PostgreSQL this opens the pool and, when enabled, applies the
    /// pending migrations.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider {
            StoreProvider::Postgres => {
                let pool = DatabasePool::connect(config).await?;
                if config.run_migrations {
                    pool.migrate().await?;
                }
                Ok(Self::postgres(pool))
            }
            StoreProvider::Memory => {
                info!("Using in-memory store; data will not survive a restart");
                Ok(Self::memory(MemoryStore::new()))
            }
        }
    }

    /// Stores backed by PostgreSQL repositories sharing one pool.
    pub fn postgres(pool: DatabasePool) -> Self {
        Self {
            guests: Arc::new(GuestRepository::new(pool.pool().clone())),
            tables: Arc::new(TableRepository::new(pool.pool().clone())),
            capacity: Arc::new(SeatingUsageRepository::new(pool.pool().clone())),
            pool: Some(pool),
        }
    }

    /// Stores backed by a single in-memory store.
    pub fn memory(store: MemoryStore) -> Self {
        Self {
            guests: Arc::new(store.clone()),
            tables: Arc::new(store.clone()),
            capacity: Arc::new(store),
            pool: None,
        }
    }

    /// Which provider these stores run on.
    pub fn provider(&self) -> StoreProvider {
        if self.pool.is_some() {
            StoreProvider::Postgres
        } else {
            StoreProvider::Memory
        }
    }

    /// Check that the backing store is reachable.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.pool {
            Some(pool) => pool.health_check().await,
            None => Ok(true),
        }
    }

    /// Release backend resources.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
