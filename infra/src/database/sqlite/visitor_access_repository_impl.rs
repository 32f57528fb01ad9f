//! SQLite implementation of the VisitorAccessRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use resume_core::domain::entities::visitor_access::{
    AccessType, NewVisitorAccess, VisitorAccessEntry,
};
use resume_core::errors::DomainError;
use resume_core::repositories::VisitorAccessRepository;

use super::columns::{db_error, integer, text};

pub struct SqliteVisitorAccessRepository {
    pool: SqlitePool,
}

impl SqliteVisitorAccessRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_entry(row: &SqliteRow) -> Result<VisitorAccessEntry, DomainError> {
        let access_type: AccessType = text(row, "access_type")?
            .parse()
            .map_err(|e: String| DomainError::Internal { message: e })?;

        Ok(VisitorAccessEntry {
            id: integer(row, "id")?,
            access_type,
            value: text(row, "value")?,
            access_key: text(row, "access_key")?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get created_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl VisitorAccessRepository for SqliteVisitorAccessRepository {
    async fn find_access_key(
        &self,
        access_type: AccessType,
        value: &str,
    ) -> Result<Option<String>, DomainError> {
        let row = sqlx::query(
            "SELECT access_key FROM visitor_access WHERE access_type = ? AND value = ? LIMIT 1",
        )
        .bind(access_type.as_str())
        .bind(value)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to look up visitor access"))?;

        row.as_ref().map(|r| text(r, "access_key")).transpose()
    }

    async fn list(&self) -> Result<Vec<VisitorAccessEntry>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, access_type, value, access_key, created_at FROM visitor_access ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list visitor access"))?;

        rows.iter().map(Self::row_to_entry).collect()
    }

    async fn create(&self, entry: NewVisitorAccess) -> Result<VisitorAccessEntry, DomainError> {
        let created_at = Utc::now();

        let result = sqlx::query(
            "INSERT INTO visitor_access (access_type, value, access_key, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(entry.access_type.as_str())
        .bind(&entry.value)
        .bind(&entry.access_key)
        .bind(created_at)
        .execute(&self.pool)
        .await;

        let result = match result {
            Ok(result) => result,
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                return Err(DomainError::Validation {
                    message: "visitor access entry already exists".to_string(),
                });
            }
            Err(e) => return Err(db_error("Failed to add visitor access")(e)),
        };

        Ok(VisitorAccessEntry {
            id: result.last_insert_rowid(),
            access_type: entry.access_type,
            value: entry.value,
            access_key: entry.access_key,
            created_at,
        })
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM visitor_access WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete visitor access"))?;

        Ok(result.rows_affected() > 0)
    }
}
