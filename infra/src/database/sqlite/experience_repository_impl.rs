//! SQLite implementation of `ResourceRepository<Experience>`.

use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, SqlitePool};

use resume_core::domain::entities::experience::Experience;
use resume_core::errors::DomainError;
use resume_core::repositories::ResourceRepository;

use super::columns::{db_error, integer, json_list, text, to_json};

const SELECT_EXPERIENCE: &str = r#"
    SELECT id, period, title, company, location, color, icon,
           responsibilities, achievements, technologies, sort_order
    FROM experiences
"#;

pub struct SqliteExperienceRepository {
    pool: SqlitePool,
}

impl SqliteExperienceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_experience(row: &SqliteRow) -> Result<Experience, DomainError> {
        Ok(Experience {
            id: integer(row, "id")?,
            period: text(row, "period")?,
            title: text(row, "title")?,
            company: text(row, "company")?,
            location: text(row, "location")?,
            color: text(row, "color")?,
            icon: text(row, "icon")?,
            responsibilities: json_list(row, "responsibilities")?,
            achievements: json_list(row, "achievements")?,
            technologies: json_list(row, "technologies")?,
            sort_order: integer(row, "sort_order")?,
        })
    }
}

#[async_trait]
impl ResourceRepository<Experience> for SqliteExperienceRepository {
    async fn list(&self) -> Result<Vec<Experience>, DomainError> {
        let query = format!("{} ORDER BY sort_order, id", SELECT_EXPERIENCE);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list experiences"))?;

        rows.iter().map(Self::row_to_experience).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Experience>, DomainError> {
        let query = format!("{} WHERE id = ?", SELECT_EXPERIENCE);

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find experience"))?;

        row.as_ref().map(Self::row_to_experience).transpose()
    }

    async fn create(&self, mut record: Experience) -> Result<Experience, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO experiences (
                period, title, company, location, color, icon,
                responsibilities, achievements, technologies, sort_order
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.period)
        .bind(&record.title)
        .bind(&record.company)
        .bind(&record.location)
        .bind(&record.color)
        .bind(&record.icon)
        .bind(to_json(&record.responsibilities)?)
        .bind(to_json(&record.achievements)?)
        .bind(to_json(&record.technologies)?)
        .bind(record.sort_order)
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to create experience"))?;

        record.id = result.last_insert_rowid();
        Ok(record)
    }

    async fn update(&self, id: i64, mut record: Experience) -> Result<Option<Experience>, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE experiences SET
                period = ?, title = ?, company = ?, location = ?, color = ?, icon = ?,
                responsibilities = ?, achievements = ?, technologies = ?, sort_order = ?
            WHERE id = ?
            "#,
        )
        .bind(&record.period)
        .bind(&record.title)
        .bind(&record.company)
        .bind(&record.location)
        .bind(&record.color)
        .bind(&record.icon)
        .bind(to_json(&record.responsibilities)?)
        .bind(to_json(&record.achievements)?)
        .bind(to_json(&record.technologies)?)
        .bind(record.sort_order)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to update experience"))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        record.id = id;
        Ok(Some(record))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM experiences WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete experience"))?;

        Ok(result.rows_affected() > 0)
    }
}
