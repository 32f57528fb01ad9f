//! SQLite implementation of the AdminRepository trait.

use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, SqlitePool};

use resume_core::domain::entities::admin::AdminAccount;
use resume_core::errors::DomainError;
use resume_core::repositories::AdminRepository;

use super::columns::{db_error, integer, text};

/// Reads and updates rows of the `users` table
pub struct SqliteAdminRepository {
    /// Database connection pool
    pool: SqlitePool,
}

impl SqliteAdminRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_account(row: &SqliteRow) -> Result<AdminAccount, DomainError> {
        Ok(AdminAccount {
            id: integer(row, "id")?,
            username: text(row, "username")?,
            password_hash: text(row, "password")?,
            role: text(row, "role")?,
        })
    }
}

#[async_trait]
impl AdminRepository for SqliteAdminRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<AdminAccount>, DomainError> {
        let row = sqlx::query("SELECT id, username, password, role FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find user by username"))?;

        row.as_ref().map(Self::row_to_account).transpose()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<AdminAccount>, DomainError> {
        let row = sqlx::query("SELECT id, username, password, role FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find user by id"))?;

        row.as_ref().map(Self::row_to_account).transpose()
    }

    async fn update_password_hash(
        &self,
        id: i64,
        password_hash: &str,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query("UPDATE users SET password = ? WHERE id = ?")
            .bind(password_hash)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to update password"))?;

        Ok(result.rows_affected() > 0)
    }
}
