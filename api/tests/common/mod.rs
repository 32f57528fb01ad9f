//! Shared fixtures for the HTTP tests: mock repositories with a small seeded
//! data set, and a fixed clock so token lifetimes can be stepped through.

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use chrono::Utc;
use resume_api::{AppState, Repositories};
use resume_core::repositories::{
    InMemoryResourceRepository, MockAdminRepository, MockProfileRepository, MockSkillRepository,
    MockVisitorAccessRepository,
};
use resume_core::services::{auth::hash_password, FixedClock};
use resume_core::{
    AdminAccount, Certificate, Experience, Profile, Project, Skill, SkillCategory, ADMIN_ROLE,
};
use resume_shared::{AuthConfig, JwtSchemeConfig};

pub const ADMIN_SECRET: &str = "admin-test-secret";
pub const VISITOR_SECRET: &str = "visitor-test-secret";
pub const ADMIN_PASSWORD: &str = "admin123";

pub struct TestContext {
    pub state: web::Data<AppState>,
    pub clock: Arc<FixedClock>,
}

impl TestContext {
    pub fn admin_token(&self) -> String {
        self.state.admin_tokens.issue(&admin_account()).unwrap()
    }

    /// Admin-scheme token for an account whose role is not `admin`
    pub fn editor_token(&self) -> String {
        self.state.admin_tokens.issue(&editor_account()).unwrap()
    }

    pub fn visitor_token(&self) -> String {
        self.state.visitor_tokens.issue("visitor_key").unwrap()
    }
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

pub fn auth_config() -> AuthConfig {
    AuthConfig {
        admin: JwtSchemeConfig::new(ADMIN_SECRET),
        visitor: JwtSchemeConfig::new(VISITOR_SECRET),
        bcrypt_cost: 4,
        read_only: false,
    }
}

fn admin_account() -> AdminAccount {
    AdminAccount::new(1, "admin", "", ADMIN_ROLE)
}

fn editor_account() -> AdminAccount {
    AdminAccount::new(2, "editor", "", "editor")
}

pub fn seeded_profile() -> Profile {
    Profile {
        id: 1,
        name: "Ada Lovelace".to_string(),
        title: "Backend Engineer".to_string(),
        email: "ada@example.com".to_string(),
        phone: "555-0100".to_string(),
        years_of_exp: 7,
        ..Profile::default()
    }
}

pub async fn test_context() -> TestContext {
    build_context(auth_config(), Some(seeded_profile())).await
}

pub async fn build_context(config: AuthConfig, profile: Option<Profile>) -> TestContext {
    let password_hash = hash_password(ADMIN_PASSWORD, 4).await.unwrap();
    let admins = MockAdminRepository::with_accounts([
        AdminAccount::new(1, "admin", password_hash.clone(), ADMIN_ROLE),
        AdminAccount::new(2, "editor", password_hash, "editor"),
    ]);

    let profiles = match profile {
        Some(profile) => MockProfileRepository::with_profile(profile),
        None => MockProfileRepository::new(),
    };

    let skills = Arc::new(MockSkillRepository::with_categories(vec![SkillCategory {
        id: 1,
        name: "Backend".to_string(),
        skills: vec![Skill {
            id: 1,
            category_id: 1,
            name: "Rust".to_string(),
            level: 90,
            tags: vec!["systems".to_string()],
            ..Skill::default()
        }],
        ..SkillCategory::default()
    }]));

    let repositories = Repositories {
        admins: Arc::new(admins),
        visitor_access: Arc::new(MockVisitorAccessRepository::with_default_password().await),
        profiles: Arc::new(profiles),
        skills: skills.clone(),
        skill_categories: skills,
        experiences: Arc::new(InMemoryResourceRepository::with_records([Experience {
            id: 1,
            title: "Engineer".to_string(),
            company: "Analytical Engines Ltd".to_string(),
            technologies: vec!["Rust".to_string()],
            ..Experience::default()
        }])),
        projects: Arc::new(InMemoryResourceRepository::with_records([Project {
            id: 1,
            title: "Resume API".to_string(),
            tech_stack: vec!["actix-web".to_string(), "sqlx".to_string()],
            ..Project::default()
        }])),
        certificates: Arc::new(InMemoryResourceRepository::<Certificate>::new()),
    };

    let clock = Arc::new(FixedClock::new(Utc::now()));
    let state = AppState::new(repositories, &config, clock.clone());

    TestContext {
        state: web::Data::new(state),
        clock,
    }
}
