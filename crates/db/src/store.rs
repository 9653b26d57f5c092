//! Execution seam between the listing service and the database.
//!
//! [`ListingService`](crate::service::ListingService) builds SQL and maps
//! rows; a [`ListingStore`] only runs the assembled query. Production uses
//! [`MySqlListingStore`]; tests substitute an in-memory store.

use async_trait::async_trait;
use fes_core::region::ListingKind;

use crate::error::StoreError;
use crate::models::contest::ContestRow;
use crate::models::game::GameRow;
use crate::query::{bind_values, bind_values_scalar, SqlQuery};
use crate::DbPool;

/// Runs assembled listing queries.
#[async_trait]
pub trait ListingStore: Send + Sync {
    async fn fetch_games(&self, query: &SqlQuery) -> Result<Vec<GameRow>, StoreError>;

    async fn fetch_contests(&self, query: &SqlQuery) -> Result<Vec<ContestRow>, StoreError>;

    /// Run a query returning a single integer (e.g. `COUNT(*)`).
    async fn fetch_count(&self, query: &SqlQuery) -> Result<i64, StoreError>;

    /// Confirm the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// [`ListingStore`] backed by a pooled MySQL connection.
///
/// Cloning is cheap; the pool is reference-counted.
#[derive(Clone)]
pub struct MySqlListingStore {
    pool: DbPool,
}

impl MySqlListingStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListingStore for MySqlListingStore {
    async fn fetch_games(&self, query: &SqlQuery) -> Result<Vec<GameRow>, StoreError> {
        bind_values(sqlx::query_as::<_, GameRow>(&query.sql), &query.binds)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError::classify(ListingKind::Game, e))
    }

    async fn fetch_contests(&self, query: &SqlQuery) -> Result<Vec<ContestRow>, StoreError> {
        bind_values(sqlx::query_as::<_, ContestRow>(&query.sql), &query.binds)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError::classify(ListingKind::Contest, e))
    }

    async fn fetch_count(&self, query: &SqlQuery) -> Result<i64, StoreError> {
        bind_values_scalar(sqlx::query_scalar::<_, i64>(&query.sql), &query.binds)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StoreError::classify(ListingKind::Game, e))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(StoreError::Connectivity)
    }
}
