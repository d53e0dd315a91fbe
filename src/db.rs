//! Database connection pool, migrations, and the read-only record store.
//!
//! This module provides:
//! - Creating the PostgreSQL connection pool (opened once at startup)
//! - Running the bundled migrations
//! - The `Store` trait, the seam every service reads through
//! - `PgStore`, the PostgreSQL implementation of `Store`

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::models::{
    api_key::ApiKey,
    emoji::{EmojiQuery, EmojiQueryRow},
};

/// Type alias for PostgreSQL connection pool.
pub type DbPool = Pool<Postgres>;

/// Create a new PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection string is invalid
/// - Cannot connect to PostgreSQL server
/// - Database authentication fails
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    sqlx::postgres::PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Run database migrations from the `migrations/` directory.
///
/// Migrations are tracked in the `_sqlx_migrations` table, so each one runs only once.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    // The macro reads migrations at compile time from ./migrations directory
    sqlx::migrate!("./migrations").run(pool).await
}

/// Unique-key reads against the externally owned tables.
///
/// Every method is a single read-only round trip. Nothing here writes.
#[async_trait]
pub trait Store: Send + Sync {
    /// Look up an API key by exact key match.
    async fn find_api_key(&self, key: &str) -> Result<Option<ApiKey>, sqlx::Error>;

    /// Look up an emoji query by exact emoji match, including its analyses
    /// ordered oldest first.
    async fn find_emoji_query(&self, emoji: &str) -> Result<Option<EmojiQuery>, sqlx::Error>;

    /// Verify the database is reachable.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

/// `Store` backed by a PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn find_api_key(&self, key: &str) -> Result<Option<ApiKey>, sqlx::Error> {
        sqlx::query_as::<_, ApiKey>(
            "SELECT key, user_id, is_active
             FROM api_keys
             WHERE key = $1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
    }

    async fn find_emoji_query(&self, emoji: &str) -> Result<Option<EmojiQuery>, sqlx::Error> {
        // One row per analysis, or a single row with null analysis columns
        // when the query has none.
        let rows = sqlx::query_as::<_, EmojiQueryRow>(
            r#"
            SELECT q.id, q.emoji, a.id AS analysis_id, a.analysis_result
            FROM emoji_queries q
            LEFT JOIN emoji_analyses a ON a.emoji_query_id = q.id
            WHERE q.emoji = $1
            ORDER BY a.created_at ASC, a.id ASC
            "#,
        )
        .bind(emoji)
        .fetch_all(&self.pool)
        .await?;

        Ok(EmojiQuery::from_rows(rows))
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
