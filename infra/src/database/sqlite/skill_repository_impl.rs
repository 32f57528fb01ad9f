//! SQLite implementation of the skill repositories.

use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, SqlitePool};

use resume_core::domain::entities::skill::{Skill, SkillCategory};
use resume_core::errors::DomainError;
use resume_core::repositories::{ResourceRepository, SkillCategoryRepository};

use super::columns::{db_error, integer, json_list, text, to_json, write_error};

const SELECT_SKILL: &str = "SELECT id, category_id, name, level, description, tags FROM skills";

pub struct SqliteSkillRepository {
    pool: SqlitePool,
}

impl SqliteSkillRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_skill(row: &SqliteRow) -> Result<Skill, DomainError> {
        Ok(Skill {
            id: integer(row, "id")?,
            category_id: integer(row, "category_id")?,
            name: text(row, "name")?,
            level: integer(row, "level")?,
            description: text(row, "description")?,
            tags: json_list(row, "tags")?,
        })
    }

    fn row_to_category(row: &SqliteRow) -> Result<SkillCategory, DomainError> {
        Ok(SkillCategory {
            id: integer(row, "id")?,
            name: text(row, "name")?,
            description: text(row, "description")?,
            icon: text(row, "icon")?,
            skills: Vec::new(),
        })
    }
}

#[async_trait]
impl ResourceRepository<Skill> for SqliteSkillRepository {
    async fn list(&self) -> Result<Vec<Skill>, DomainError> {
        let query = format!("{} ORDER BY id", SELECT_SKILL);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list skills"))?;

        rows.iter().map(Self::row_to_skill).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Skill>, DomainError> {
        let query = format!("{} WHERE id = ?", SELECT_SKILL);

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find skill"))?;

        row.as_ref().map(Self::row_to_skill).transpose()
    }

    async fn create(&self, mut record: Skill) -> Result<Skill, DomainError> {
        let result = sqlx::query(
            "INSERT INTO skills (category_id, name, level, description, tags) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(record.category_id)
        .bind(&record.name)
        .bind(record.level)
        .bind(&record.description)
        .bind(to_json(&record.tags)?)
        .execute(&self.pool)
        .await
        .map_err(write_error("Failed to create skill"))?;

        record.id = result.last_insert_rowid();
        Ok(record)
    }

    async fn update(&self, id: i64, mut record: Skill) -> Result<Option<Skill>, DomainError> {
        let result = sqlx::query(
            "UPDATE skills SET category_id = ?, name = ?, level = ?, description = ?, tags = ? WHERE id = ?",
        )
        .bind(record.category_id)
        .bind(&record.name)
        .bind(record.level)
        .bind(&record.description)
        .bind(to_json(&record.tags)?)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(write_error("Failed to update skill"))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        record.id = id;
        Ok(Some(record))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM skills WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete skill"))?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl SkillCategoryRepository for SqliteSkillRepository {
    async fn list_categories(&self) -> Result<Vec<SkillCategory>, DomainError> {
        let rows = sqlx::query("SELECT id, name, description, icon FROM skill_categories ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list skill categories"))?;

        let mut categories = rows
            .iter()
            .map(Self::row_to_category)
            .collect::<Result<Vec<_>, _>>()?;

        for skill in self.list().await? {
            if let Some(category) = categories.iter_mut().find(|c| c.id == skill.category_id) {
                category.skills.push(skill);
            }
        }

        Ok(categories)
    }
}
