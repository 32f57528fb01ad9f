//! # Infrastructure Layer
//!
//! Concrete implementations of the `resume_core` repository traits backed by
//! SQLite through SQLx, plus connection pool management.

// Re-export core error types for convenience
pub use resume_core::errors::{DomainError, DomainResult};

/// Database module - SQLite implementations using SQLx
pub mod database;

pub use database::{
    DatabasePool, SqliteAdminRepository, SqliteCertificateRepository, SqliteExperienceRepository,
    SqliteProfileRepository, SqliteProjectRepository, SqliteSkillRepository,
    SqliteVisitorAccessRepository,
};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
