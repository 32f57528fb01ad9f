//! # Resume Core
//!
//! Core business logic and domain layer for the resume API.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    AccessType, AdminAccount, AdminClaims, Certificate, Experience, Metric, NewVisitorAccess,
    Profile, ProfileField, Project, Resource, Skill, SkillCategory, VisitorAccessEntry,
    VisitorClaims, ADMIN_ROLE,
};
pub use errors::{AuthError, DomainError, DomainResult, ErrorKind, TokenError};
pub use repositories::{
    AdminRepository, ProfileRepository, ResourceRepository, SkillCategoryRepository,
    VisitorAccessRepository,
};
pub use services::{
    AdminTokenScheme, AuthService, AuthServiceConfig, Clock, SystemClock, VisitorService,
    VisitorTokenScheme,
};
