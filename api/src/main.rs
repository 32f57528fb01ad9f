use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::info;
use resume_api::{config, create_app, AppState, Repositories};
use resume_core::services::SystemClock;
use resume_infra::{
    DatabasePool, SqliteAdminRepository, SqliteCertificateRepository, SqliteExperienceRepository,
    SqliteProfileRepository, SqliteProjectRepository, SqliteSkillRepository,
    SqliteVisitorAccessRepository,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = config::load().context("invalid configuration")?;
    info!(
        "Starting resume API ({:?}) on {}",
        config.environment,
        config.server.bind_address()
    );

    let pool = DatabasePool::new(config.database.clone())
        .await
        .context("failed to open database")?;
    let db = pool.pool().clone();
    let skills = Arc::new(SqliteSkillRepository::new(db.clone()));
    let repositories = Repositories {
        admins: Arc::new(SqliteAdminRepository::new(db.clone())),
        visitor_access: Arc::new(SqliteVisitorAccessRepository::new(db.clone())),
        profiles: Arc::new(SqliteProfileRepository::new(db.clone())),
        skills: skills.clone(),
        skill_categories: skills,
        experiences: Arc::new(SqliteExperienceRepository::new(db.clone())),
        projects: Arc::new(SqliteProjectRepository::new(db.clone())),
        certificates: Arc::new(SqliteCertificateRepository::new(db)),
    };

    if config.auth.read_only {
        info!("Admin modifications are disabled");
    }

    let app_state = web::Data::new(AppState::new(
        repositories,
        &config.auth,
        Arc::new(SystemClock),
    ));

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(config.server.bind_address())
        .with_context(|| format!("failed to bind {}", config.server.bind_address()))?
        .run()
        .await?;

    pool.close().await;
    Ok(())
}
