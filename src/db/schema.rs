//! Database schema initialization

use sqlx::SqlitePool;

use crate::error::Result;

/// Initialize the database schema
pub async fn initialize_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(SCHEMA_SQL).execute(pool).await?;

    Ok(())
}

const SCHEMA_SQL: &str = r#"
-- Users table (API key identities, provisioned out-of-band)
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    -- api_key is not UNIQUE; lookups take the first match in insertion order
    api_key TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_users_api_key ON users(api_key);

-- File hash records, one row per (user, content) after the dedup check
CREATE TABLE IF NOT EXISTS file_hashes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    -- Plain identifier copy of users.id; no FOREIGN KEY enforcement
    user_id INTEGER NOT NULL,
    filename TEXT NOT NULL,
    hash_md5 TEXT NOT NULL,
    hash_sha256 TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_file_hashes_user_id ON file_hashes(user_id);
CREATE INDEX IF NOT EXISTS idx_file_hashes_md5 ON file_hashes(hash_md5);
CREATE INDEX IF NOT EXISTS idx_file_hashes_sha256 ON file_hashes(hash_sha256);
"#;
