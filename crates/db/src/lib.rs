//! MySQL access for the listing tables.
//!
//! - [`query`] turns a [`fes_core::listing::ListingQuery`] into SQL text plus
//!   bind values.
//! - [`store`] executes those queries ([`store::ListingStore`]).
//! - [`models`] decodes rows and maps them to wire records.
//! - [`service`] ties the three together per operation.

use sqlx::mysql::MySqlPoolOptions;

pub mod error;
pub mod models;
pub mod query;
pub mod service;
pub mod store;

pub type DbPool = sqlx::MySqlPool;

/// Default upper bound on pooled connections.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 20;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
