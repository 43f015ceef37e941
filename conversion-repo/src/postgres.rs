//! PostgreSQL repository adapter.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use sqlx::types::Json;

use conversion_types::{
    ConversionId, ConversionRecord, ConversionRepository, NewConversion, RepoError,
};

use crate::document::{COLLECTION, ConversionDocument, DbConversion};

// ─────────────────────────────────────────────────────────────────────────────
// PostgreSQL Repository
// ─────────────────────────────────────────────────────────────────────────────

/// PostgreSQL repository storing documents as JSONB.
pub struct PostgresRepo {
    pool: PgPool,
}

/// Executes SQL statements from a migration file, splitting by semicolons.
async fn execute_migration(pool: &PgPool, sql: &str, name: &str) -> Result<(), anyhow::Error> {
    for statement in sql.split(';') {
        let stmt = statement.trim();
        if !stmt.is_empty() {
            sqlx::query(stmt)
                .execute(pool)
                .await
                .map_err(|e| anyhow::anyhow!("Migration {} failed: {}", name, e))?;
        }
    }
    Ok(())
}

impl PostgresRepo {
    /// Creates a new PostgreSQL repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        execute_migration(
            &pool,
            include_str!("../migrations/0001_create_conversion_pg.sql"),
            "0001",
        )
        .await?;
        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ConversionRepository for PostgresRepo {
    async fn insert(&self, conversion: NewConversion) -> Result<ConversionRecord, RepoError> {
        let id = ConversionId::new();
        let document = ConversionDocument::from(&conversion);

        sqlx::query(r#"INSERT INTO conversion (id, document, created_at) VALUES ($1, $2, $3)"#)
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
        let rows: Vec<DbConversion> =
            sqlx::query_as(r#"SELECT id, document FROM conversion ORDER BY created_at ASC"#)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| RepoError::Database(e.to_string()))?;

        rows.into_iter().map(DbConversion::into_domain).collect()
    }

    async fn find_by_id(&self, id: ConversionId) -> Result<Option<ConversionRecord>, RepoError> {
        let row: Option<DbConversion> =
            sqlx::query_as(r#"SELECT id, document FROM conversion WHERE id = $1"#)
                .bind(id.to_string())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| RepoError::Database(e.to_string()))?;

        row.map(DbConversion::into_domain).transpose()
    }

    async fn delete_by_id(&self, id: ConversionId) -> Result<(), RepoError> {
        let result = sqlx::query(r#"DELETE FROM conversion WHERE id = $1"#)
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
