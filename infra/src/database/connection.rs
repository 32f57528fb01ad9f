//! SQLite connection pool

use std::str::FromStr;
use std::time::Duration;

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    ConnectOptions, SqlitePool,
};
use tracing::log::LevelFilter;

use resume_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// Owns the SQLx pool every repository is built from
#[derive(Clone)]
pub struct DatabasePool {
    pool: SqlitePool,
}

impl DatabasePool {
    /// Open the database named by `config.url`, creating the file if needed.
    ///
    /// A `sqlite::memory:` database only lives as long as its connection, so
    /// such pools hold exactly one connection and never recycle it.
    pub async fn new(config: DatabaseConfig) -> Result<Self, InfrastructureError> {
        let connect_options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| InfrastructureError::Config(format!("invalid database URL: {}", e)))?
            .create_if_missing(true)
            .foreign_keys(true)
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_secs(1));

        let options = SqlitePoolOptions::new()
            .acquire_timeout(Duration::from_secs(config.connect_timeout));
        let options = if config.is_in_memory() {
            options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            options.max_connections(config.max_connections)
        };

        let pool = options.connect_with(connect_options).await.map_err(|e| {
            tracing::error!(url = %config.url, error = %e, "Failed to open database");
            InfrastructureError::Database(e)
        })?;

        tracing::info!(
            url = %config.url,
            max_connections = pool.options().get_max_connections(),
            "Database opened"
        );

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Wait for in-flight queries and close every connection
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_directory_fails_to_open() {
        let config = DatabaseConfig::new("sqlite:///no/such/directory/resume.db");
        assert!(DatabasePool::new(config).await.is_err());
    }

    #[tokio::test]
    async fn test_in_memory_pool_is_pinned_to_one_connection() {
        let pool = DatabasePool::new(DatabaseConfig::new("sqlite::memory:"))
            .await
            .unwrap();
        assert_eq!(pool.pool().options().get_max_connections(), 1);

        // A table created on one checkout is visible on the next.
        sqlx::query("CREATE TABLE t (x INTEGER)")
            .execute(pool.pool())
            .await
            .unwrap();
        sqlx::query("INSERT INTO t VALUES (1)")
            .execute(pool.pool())
            .await
            .unwrap();
    }
}
