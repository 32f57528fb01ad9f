//! Database module - SQLite implementations using SQLx
//!
//! This module provides database access layer implementations including:
//! - Connection pool management
//! - Repository pattern implementations

pub mod connection;
pub mod sqlite;

// Re-export commonly used types
pub use connection::DatabasePool;
pub use sqlite::{
    SqliteAdminRepository, SqliteCertificateRepository, SqliteExperienceRepository,
    SqliteProfileRepository, SqliteProjectRepository, SqliteSkillRepository,
    SqliteVisitorAccessRepository,
};
