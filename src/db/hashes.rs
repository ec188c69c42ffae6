//! File hash record database operations

use chrono::Utc;
use serde::Serialize;
use sqlx::SqlitePool;

use crate::error::{AppError, Result};

/// Hash algorithm selector accepted by lookup and delete requests.
///
/// Only the literal strings `md5` and `sha256` are valid; anything else,
/// including an absent parameter, is a bad request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgo {
    Md5,
    Sha256,
}

impl HashAlgo {
    /// Parse the `hash` query parameter value
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "md5" => Some(Self::Md5),
            "sha256" => Some(Self::Sha256),
            _ => None,
        }
    }

    /// Column holding digests for this algorithm
    fn column(self) -> &'static str {
        match self {
            Self::Md5 => "hash_md5",
            Self::Sha256 => "hash_sha256",
        }
    }
}

/// File hash record
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct FileHash {
    pub id: i64,
    pub user_id: i64,
    pub filename: String,
    pub hash_md5: String,
    pub hash_sha256: String,
    pub created_at: String,
}

/// File hash repository
pub struct FileHashRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> FileHashRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a user's record with the given MD5 digest.
    ///
    /// This is the dedup probe. It keys on MD5 only, so two different
    /// contents with colliding MD5s are treated as the same file.
    pub async fn find_by_user_and_md5(
        &self,
        user_id: i64,
        md5: &str,
    ) -> Result<Option<FileHash>> {
        let record = sqlx::query_as::<_, FileHash>(
            r#"
            SELECT id, user_id, filename, hash_md5, hash_sha256, created_at
            FROM file_hashes
            WHERE user_id = ? AND hash_md5 = ?
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .bind(md5)
        .fetch_optional(self.pool)
        .await?;

        Ok(record)
    }

    /// Get a record by id
    pub async fn find_by_id(&self, id: i64) -> Result<Option<FileHash>> {
        let record = sqlx::query_as::<_, FileHash>(
            r#"
            SELECT id, user_id, filename, hash_md5, hash_sha256, created_at
            FROM file_hashes
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(record)
    }

    /// Insert a new record
    pub async fn insert(
        &self,
        user_id: i64,
        filename: &str,
        md5: &str,
        sha256: &str,
    ) -> Result<FileHash> {
        let now = Utc::now().to_rfc3339();

        let result = sqlx::query(
            r#"
            INSERT INTO file_hashes (user_id, filename, hash_md5, hash_sha256, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(user_id)
        .bind(filename)
        .bind(md5)
        .bind(sha256)
        .bind(&now)
        .execute(self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal("Failed to fetch created record".to_string()))
    }

    /// List every record whose digest matches, across all users.
    ///
    /// Ordered by id, i.e. insertion order.
    pub async fn list_by_hash(&self, algo: HashAlgo, value: &str) -> Result<Vec<FileHash>> {
        let sql = format!(
            "SELECT id, user_id, filename, hash_md5, hash_sha256, created_at \
             FROM file_hashes WHERE {} = ? ORDER BY id",
            algo.column()
        );

        let records = sqlx::query_as::<_, FileHash>(&sql)
            .bind(value)
            .fetch_all(self.pool)
            .await?;

        Ok(records)
    }

    /// Find the record a delete request targets.
    ///
    /// The md5 path is scoped to the caller's own records; the sha256 path
    /// takes the first match regardless of owner.
    pub async fn find_for_delete(
        &self,
        algo: HashAlgo,
        value: &str,
        user_id: i64,
    ) -> Result<Option<FileHash>> {
        let record = match algo {
            HashAlgo::Md5 => {
                sqlx::query_as::<_, FileHash>(
                    r#"
                    SELECT id, user_id, filename, hash_md5, hash_sha256, created_at
                    FROM file_hashes
                    WHERE hash_md5 = ? AND user_id = ?
                    ORDER BY id
                    LIMIT 1
                    "#,
                )
                .bind(value)
                .bind(user_id)
                .fetch_optional(self.pool)
                .await?
            }
            HashAlgo::Sha256 => {
                sqlx::query_as::<_, FileHash>(
                    r#"
                    SELECT id, user_id, filename, hash_md5, hash_sha256, created_at
                    FROM file_hashes
                    WHERE hash_sha256 = ?
                    ORDER BY id
                    LIMIT 1
                    "#,
                )
                .bind(value)
                .fetch_optional(self.pool)
                .await?
            }
        };

        Ok(record)
    }

    /// Delete a record by id. Returns whether a row was removed.
    pub async fn delete_by_id(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM file_hashes WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
