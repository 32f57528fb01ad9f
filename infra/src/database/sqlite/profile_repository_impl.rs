//! SQLite implementation of the ProfileRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use resume_core::domain::entities::profile::{Profile, ProfileField};
use resume_core::errors::DomainError;
use resume_core::repositories::ProfileRepository;

use super::columns::{db_error, integer, text};

const PROFILE_COLUMNS: &str = "id, name, title, avatar, email, phone, location, introduction, \
     years_of_exp, education, job_status, philosophy, last_updated, resume_file_url";

pub struct SqliteProfileRepository {
    pool: SqlitePool,
}

impl SqliteProfileRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_profile(row: &SqliteRow) -> Result<Profile, DomainError> {
        Ok(Profile {
            id: integer(row, "id")?,
            name: text(row, "name")?,
            title: text(row, "title")?,
            avatar: text(row, "avatar")?,
            email: text(row, "email")?,
            phone: text(row, "phone")?,
            location: text(row, "location")?,
            introduction: text(row, "introduction")?,
            years_of_exp: integer(row, "years_of_exp")?,
            education: text(row, "education")?,
            job_status: text(row, "job_status")?,
            philosophy: text(row, "philosophy")?,
            last_updated: row
                .try_get::<Option<DateTime<Utc>>, _>("last_updated")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get last_updated: {}", e),
                })?,
            resume_file_url: text(row, "resume_file_url")?,
        })
    }
}

#[async_trait]
impl ProfileRepository for SqliteProfileRepository {
    async fn get(&self) -> Result<Option<Profile>, DomainError> {
        let query = format!("SELECT {} FROM profile ORDER BY id LIMIT 1", PROFILE_COLUMNS);

        let row = sqlx::query(&query)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to load profile"))?;

        row.as_ref().map(Self::row_to_profile).transpose()
    }

    async fn upsert(&self, mut profile: Profile) -> Result<Profile, DomainError> {
        let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM profile ORDER BY id LIMIT 1")
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to load profile"))?;

        let statement = match existing {
            Some(_) => {
                r#"
                UPDATE profile SET
                    name = ?, title = ?, avatar = ?, email = ?, phone = ?, location = ?,
                    introduction = ?, years_of_exp = ?, education = ?, job_status = ?,
                    philosophy = ?, last_updated = ?, resume_file_url = ?
                WHERE id = ?
                "#
            }
            None => {
                r#"
                INSERT INTO profile (
                    name, title, avatar, email, phone, location, introduction, years_of_exp,
                    education, job_status, philosophy, last_updated, resume_file_url
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#
            }
        };

        let mut query = sqlx::query(statement)
            .bind(&profile.name)
            .bind(&profile.title)
            .bind(&profile.avatar)
            .bind(&profile.email)
            .bind(&profile.phone)
            .bind(&profile.location)
            .bind(&profile.introduction)
            .bind(profile.years_of_exp)
            .bind(&profile.education)
            .bind(&profile.job_status)
            .bind(&profile.philosophy)
            .bind(profile.last_updated)
            .bind(&profile.resume_file_url);

        if let Some(id) = existing {
            query = query.bind(id);
        }

        let result = query
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to save profile"))?;

        profile.id = existing.unwrap_or_else(|| result.last_insert_rowid());
        Ok(profile)
    }

    async fn field_matches(&self, field: ProfileField, value: &str) -> Result<bool, DomainError> {
        let query = match field {
            ProfileField::Name => "SELECT 1 FROM profile WHERE name = ? LIMIT 1",
            ProfileField::Email => "SELECT 1 FROM profile WHERE email = ? LIMIT 1",
            ProfileField::Phone => "SELECT 1 FROM profile WHERE phone = ? LIMIT 1",
        };

        let row = sqlx::query(query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to match profile field"))?;

        Ok(row.is_some())
    }
}
