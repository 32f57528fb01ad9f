//! SQLite implementation of `ResourceRepository<Project>`.

use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, SqlitePool};

use resume_core::domain::entities::project::Project;
use resume_core::errors::DomainError;
use resume_core::repositories::ResourceRepository;

use super::columns::{db_error, flag, integer, json_list, text, to_json};

const SELECT_PROJECT: &str = r#"
    SELECT id, title, category, description, image, demo_link, repo_link,
           show_architecture, metrics, key_points, tech_stack, sort_order
    FROM projects
"#;

pub struct SqliteProjectRepository {
    pool: SqlitePool,
}

impl SqliteProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_project(row: &SqliteRow) -> Result<Project, DomainError> {
        Ok(Project {
            id: integer(row, "id")?,
            title: text(row, "title")?,
            category: text(row, "category")?,
            description: text(row, "description")?,
            image: text(row, "image")?,
            demo_link: text(row, "demo_link")?,
            repo_link: text(row, "repo_link")?,
            show_architecture: flag(row, "show_architecture")?,
            metrics: json_list(row, "metrics")?,
            key_points: json_list(row, "key_points")?,
            tech_stack: json_list(row, "tech_stack")?,
            sort_order: integer(row, "sort_order")?,
        })
    }
}

#[async_trait]
impl ResourceRepository<Project> for SqliteProjectRepository {
    async fn list(&self) -> Result<Vec<Project>, DomainError> {
        let query = format!("{} ORDER BY sort_order, id", SELECT_PROJECT);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list projects"))?;

        rows.iter().map(Self::row_to_project).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Project>, DomainError> {
        let query = format!("{} WHERE id = ?", SELECT_PROJECT);

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find project"))?;

        row.as_ref().map(Self::row_to_project).transpose()
    }

    async fn create(&self, mut record: Project) -> Result<Project, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO projects (
                title, category, description, image, demo_link, repo_link,
                show_architecture, metrics, key_points, tech_stack, sort_order
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.title)
        .bind(&record.category)
        .bind(&record.description)
        .bind(&record.image)
        .bind(&record.demo_link)
        .bind(&record.repo_link)
        .bind(record.show_architecture)
        .bind(to_json(&record.metrics)?)
        .bind(to_json(&record.key_points)?)
        .bind(to_json(&record.tech_stack)?)
        .bind(record.sort_order)
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to create project"))?;

        record.id = result.last_insert_rowid();
        Ok(record)
    }

    async fn update(&self, id: i64, mut record: Project) -> Result<Option<Project>, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE projects SET
                title = ?, category = ?, description = ?, image = ?, demo_link = ?,
                repo_link = ?, show_architecture = ?, metrics = ?, key_points = ?,
                tech_stack = ?, sort_order = ?
            WHERE id = ?
            "#,
        )
        .bind(&record.title)
        .bind(&record.category)
        .bind(&record.description)
        .bind(&record.image)
        .bind(&record.demo_link)
        .bind(&record.repo_link)
        .bind(record.show_architecture)
        .bind(to_json(&record.metrics)?)
        .bind(to_json(&record.key_points)?)
        .bind(to_json(&record.tech_stack)?)
        .bind(record.sort_order)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to update project"))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        record.id = id;
        Ok(Some(record))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete project"))?;

        Ok(result.rows_affected() > 0)
    }
}
