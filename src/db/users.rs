//! User (API key) database operations

use chrono::Utc;
use sqlx::SqlitePool;

use crate::error::{AppError, Result};

/// User record
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub api_key: String,
    pub created_at: String,
}

/// User repository
pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Look up a user by API key.
    ///
    /// Returns the first match in insertion order; the schema does not
    /// enforce key uniqueness.
    pub async fn find_by_api_key(&self, api_key: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, api_key, created_at
            FROM users
            WHERE api_key = ?
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(api_key)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Get a user by id
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, api_key, created_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Create a user with the given API key
    pub async fn create(&self, api_key: &str) -> Result<User> {
        let now = Utc::now().to_rfc3339();

        let result = sqlx::query(
            r#"
            INSERT INTO users (api_key, created_at)
            VALUES (?, ?)
            "#,
        )
        .bind(api_key)
        .bind(&now)
        .execute(self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal("Failed to fetch created user".to_string()))
    }

    /// Seed users for API keys that do not exist yet.
    ///
    /// This is the out-of-band provisioning path; no HTTP endpoint creates
    /// users. Returns the number of keys inserted.
    pub async fn seed_keys(&self, api_keys: &[String]) -> Result<usize> {
        let mut inserted = 0;

        for key in api_keys {
            if self.find_by_api_key(key).await?.is_none() {
                self.create(key).await?;
                inserted += 1;
            }
        }

        Ok(inserted)
    }
}
