//! SQLite repository adapter.
#![allow(clippy::collapsible_if)]

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::types::Json;
use std::str::FromStr;

use conversion_types::{
    ConversionId, ConversionRecord, ConversionRepository, NewConversion, RepoError,
};

use crate::document::{COLLECTION, ConversionDocument, DbConversion};

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Repository
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite repository implementation.
pub struct SqliteRepo {
    pool: SqlitePool,
}

impl SqliteRepo {
    /// Creates a new SQLite repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            // Remove query parameters
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        let repo = Self { pool };
        repo.create_schema().await?;
        Ok(repo)
    }

    /// Wraps a pool whose schema already exists.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Creates the `conversion` collection if it does not exist.
    pub async fn create_schema(&self) -> Result<(), RepoError> {
        let ddl = include_str!("../migrations/0001_create_conversion.sql");
        sqlx::query(ddl)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl ConversionRepository for SqliteRepo {
    async fn insert(&self, conversion: NewConversion) -> Result<ConversionRecord, RepoError> {
        let id = ConversionId::new();
        let document = ConversionDocument::from(&conversion);

        sqlx::query(r#"INSERT INTO conversion (id, document, created_at) VALUES (?, ?, ?)"#)
            .bind(id.to_string())
            .bind(Json(&document))
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        tracing::debug!(collection = COLLECTION, %id, "Inserted conversion document");
        Ok(conversion.into_record(id))
    }

    async fn find_all(&self) -> Result<Vec<ConversionRecord>, RepoError> {
        let rows: Vec<DbConversion> = sqlx::query_as(
            r#"SELECT id, document FROM conversion ORDER BY created_at ASC, rowid ASC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        rows.into_iter().map(DbConversion::into_domain).collect()
    }

    async fn find_by_id(&self, id: ConversionId) -> Result<Option<ConversionRecord>, RepoError> {
        let row: Option<DbConversion> =
            sqlx::query_as(r#"SELECT id, document FROM conversion WHERE id = ?"#)
                .bind(id.to_string())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| RepoError::Database(e.to_string()))?;

        row.map(DbConversion::into_domain).transpose()
    }

    async fn delete_by_id(&self, id: ConversionId) -> Result<(), RepoError> {
        let result = sqlx::query(r#"DELETE FROM conversion WHERE id = ?"#)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        tracing::debug!(
            collection = COLLECTION,
            %id,
            deleted = result.rows_affected(),
            "Deleted conversion document"
        );
        Ok(())
    }
}
