//! SQLite implementation of `ResourceRepository<Certificate>`.

use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, SqlitePool};

use resume_core::domain::entities::certificate::Certificate;
use resume_core::errors::DomainError;
use resume_core::repositories::ResourceRepository;

use super::columns::{db_error, integer, text};

const SELECT_CERTIFICATE: &str = r#"
    SELECT id, name, organization, date, description, icon, link, sort_order
    FROM certificates
"#;

pub struct SqliteCertificateRepository {
    pool: SqlitePool,
}

impl SqliteCertificateRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_certificate(row: &SqliteRow) -> Result<Certificate, DomainError> {
        Ok(Certificate {
            id: integer(row, "id")?,
            name: text(row, "name")?,
            organization: text(row, "organization")?,
            date: text(row, "date")?,
            description: text(row, "description")?,
            icon: text(row, "icon")?,
            link: text(row, "link")?,
            sort_order: integer(row, "sort_order")?,
        })
    }
}

#[async_trait]
impl ResourceRepository<Certificate> for SqliteCertificateRepository {
    async fn list(&self) -> Result<Vec<Certificate>, DomainError> {
        let query = format!("{} ORDER BY sort_order, id", SELECT_CERTIFICATE);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list certificates"))?;

        rows.iter().map(Self::row_to_certificate).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Certificate>, DomainError> {
        let query = format!("{} WHERE id = ?", SELECT_CERTIFICATE);

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find certificate"))?;

        row.as_ref().map(Self::row_to_certificate).transpose()
    }

    async fn create(&self, mut record: Certificate) -> Result<Certificate, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO certificates (name, organization, date, description, icon, link, sort_order)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.name)
        .bind(&record.organization)
        .bind(&record.date)
        .bind(&record.description)
        .bind(&record.icon)
        .bind(&record.link)
        .bind(record.sort_order)
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to create certificate"))?;

        record.id = result.last_insert_rowid();
        Ok(record)
    }

    async fn update(
        &self,
        id: i64,
        mut record: Certificate,
    ) -> Result<Option<Certificate>, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE certificates SET
                name = ?, organization = ?, date = ?, description = ?, icon = ?, link = ?,
                sort_order = ?
            WHERE id = ?
            "#,
        )
        .bind(&record.name)
        .bind(&record.organization)
        .bind(&record.date)
        .bind(&record.description)
        .bind(&record.icon)
        .bind(&record.link)
        .bind(record.sort_order)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to update certificate"))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        record.id = id;
        Ok(Some(record))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM certificates WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete certificate"))?;

        Ok(result.rows_affected() > 0)
    }
}
