//! Database module for SQLite persistence
//!
//! Holds API-key user identities and the file hash records they own.

mod hashes;
mod schema;
mod users;

pub use hashes::*;
pub use schema::*;
pub use users::*;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

use crate::error::Result;

/// Create a new database connection pool
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    // Bootstrap the schema
    initialize_schema(&pool).await?;

    Ok(pool)
}
