//! Application state shared by every worker

use std::sync::Arc;

use resume_core::{
    errors::AuthError,
    repositories::{
        AdminRepository, ProfileRepository, ResourceRepository, SkillCategoryRepository,
        VisitorAccessRepository,
    },
    services::{
        AdminTokenScheme, AuthService, AuthServiceConfig, Clock, VisitorService,
        VisitorTokenScheme,
    },
    Certificate, Experience, Project, Skill,
};
use resume_shared::AuthConfig;

use crate::handlers::error::ApiError;

/// Storage backends the application is built from
#[derive(Clone)]
pub struct Repositories {
    pub admins: Arc<dyn AdminRepository>,
    pub visitor_access: Arc<dyn VisitorAccessRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
    pub skills: Arc<dyn ResourceRepository<Skill>>,
    pub skill_categories: Arc<dyn SkillCategoryRepository>,
    pub experiences: Arc<dyn ResourceRepository<Experience>>,
    pub projects: Arc<dyn ResourceRepository<Project>>,
    pub certificates: Arc<dyn ResourceRepository<Certificate>>,
}

pub type AdminAuthService = AuthService<dyn AdminRepository>;
pub type VisitorAuthService = VisitorService<dyn VisitorAccessRepository, dyn ProfileRepository>;

pub struct AppState {
    pub auth_service: Arc<AdminAuthService>,
    pub visitor_service: Arc<VisitorAuthService>,
    pub profiles: Arc<dyn ProfileRepository>,
    pub skills: Arc<dyn ResourceRepository<Skill>>,
    pub skill_categories: Arc<dyn SkillCategoryRepository>,
    pub experiences: Arc<dyn ResourceRepository<Experience>>,
    pub projects: Arc<dyn ResourceRepository<Project>>,
    pub certificates: Arc<dyn ResourceRepository<Certificate>>,
    pub admin_tokens: Arc<AdminTokenScheme>,
    pub visitor_tokens: Arc<VisitorTokenScheme>,
    pub clock: Arc<dyn Clock>,
    /// Mutating admin endpoints answer `Forbidden` while set
    pub read_only: bool,
}

impl AppState {
    /// Wire token schemes and services on top of the given repositories
    pub fn new(repositories: Repositories, auth: &AuthConfig, clock: Arc<dyn Clock>) -> Self {
        let admin_tokens = Arc::new(AdminTokenScheme::new(&auth.admin, Arc::clone(&clock)));
        let visitor_tokens = Arc::new(VisitorTokenScheme::new(&auth.visitor, Arc::clone(&clock)));

        let auth_service = Arc::new(AuthService::new(
            repositories.admins,
            Arc::clone(&admin_tokens),
            AuthServiceConfig::from(auth),
        ));
        let visitor_service = Arc::new(VisitorService::new(
            repositories.visitor_access,
            Arc::clone(&repositories.profiles),
            Arc::clone(&visitor_tokens),
        ));

        Self {
            auth_service,
            visitor_service,
            profiles: repositories.profiles,
            skills: repositories.skills,
            skill_categories: repositories.skill_categories,
            experiences: repositories.experiences,
            projects: repositories.projects,
            certificates: repositories.certificates,
            admin_tokens,
            visitor_tokens,
            clock,
            read_only: auth.read_only,
        }
    }

    /// Fails with `Forbidden` when the deployment is read-only
    pub fn ensure_writable(&self) -> Result<(), ApiError> {
        if self.read_only {
            return Err(AuthError::ModificationDisabled.into());
        }
        Ok(())
    }
}
