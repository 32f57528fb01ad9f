//! Shared helpers for SQLite repository tests

use resume_infra::DatabasePool;
use resume_shared::config::DatabaseConfig;

const SCHEMA: &str = include_str!("../fixtures/schema.sql");

/// A fresh in-memory database with the fixture schema applied
pub async fn test_pool() -> DatabasePool {
    let pool = DatabasePool::new(DatabaseConfig::new("sqlite::memory:"))
        .await
        .expect("in-memory pool");

    for statement in SCHEMA.split(';') {
        let statement = statement
            .lines()
            .filter(|line| !line.trim_start().starts_with("--"))
            .collect::<Vec<_>>()
            .join("\n");
        if statement.trim().is_empty() {
            continue;
        }
        sqlx::query(&statement)
            .execute(pool.pool())
            .await
            .expect("fixture statement");
    }

    pool
}
