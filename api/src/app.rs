//! Application factory
//!
//! Route layout:
//!
//! - `GET /health` - unauthenticated
//! - `POST /api/login`, `POST /api/verify` - unauthenticated, issue tokens
//! - `/api/admin/...` - admin token, full CRUD
//! - `/api/...` - visitor token, reads only
//!
//! Bearer middleware wraps each concrete resource, never `/api` or
//! `/api/admin` as a whole: unmatched paths must reach the 404 handler
//! without a token.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error, HttpResponse,
};
use resume_core::{Certificate, Experience, Project, Skill};
use resume_shared::ApiResponse;

use crate::handlers::error::{json_error_handler, path_error_handler};
use crate::middleware::auth::BearerAuth;
use crate::routes::{
    admin::{settings, visitor_access},
    auth::{login, verify},
    content::{
        admin_resource_scope, profile, resources::list, skills, visitor_resource_scope,
    },
};
use crate::state::AppState;

/// Create and configure the application with all dependencies
pub fn create_app(
    app_state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let admin_auth = BearerAuth::new(app_state.admin_tokens.clone());
    let visitor_auth = BearerAuth::new(app_state.visitor_tokens.clone());

    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .wrap(Logger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api")
                .route("/login", web::post().to(login))
                .route("/verify", web::post().to(verify))
                .service(
                    web::scope("/admin")
                        .service(
                            web::resource("/profile")
                                .route(web::get().to(profile::get_profile))
                                .route(web::put().to(profile::update_profile))
                                .wrap(admin_auth.clone()),
                        )
                        .service(
                            admin_resource_scope::<Skill>("/skills")
                                .route("", web::get().to(skills::list_skill_categories))
                                .wrap(admin_auth.clone()),
                        )
                        .service(
                            admin_resource_scope::<Experience>("/experiences")
                                .route("", web::get().to(list::<Experience>))
                                .wrap(admin_auth.clone()),
                        )
                        .service(
                            admin_resource_scope::<Project>("/projects")
                                .route("", web::get().to(list::<Project>))
                                .wrap(admin_auth.clone()),
                        )
                        .service(
                            admin_resource_scope::<Certificate>("/certificates")
                                .route("", web::get().to(list::<Certificate>))
                                .wrap(admin_auth.clone()),
                        )
                        .service(
                            web::resource("/settings/password")
                                .route(web::put().to(settings::change_password))
                                .wrap(admin_auth.clone()),
                        )
                        .service(
                            web::scope("/visitor/access")
                                .route("", web::get().to(visitor_access::list_access))
                                .route("", web::post().to(visitor_access::add_access))
                                .route("/{id}", web::delete().to(visitor_access::delete_access))
                                .wrap(admin_auth),
                        ),
                )
                .service(
                    web::resource("/profile")
                        .route(web::get().to(profile::get_profile))
                        .wrap(visitor_auth.clone()),
                )
                .service(
                    visitor_resource_scope::<Skill>("/skills")
                        .route("", web::get().to(skills::list_skill_categories))
                        .wrap(visitor_auth.clone()),
                )
                .service(
                    visitor_resource_scope::<Experience>("/experiences")
                        .route("", web::get().to(list::<Experience>))
                        .wrap(visitor_auth.clone()),
                )
                .service(
                    visitor_resource_scope::<Project>("/projects")
                        .route("", web::get().to(list::<Project>))
                        .wrap(visitor_auth.clone()),
                )
                .service(
                    visitor_resource_scope::<Certificate>("/certificates")
                        .route("", web::get().to(list::<Certificate>))
                        .wrap(visitor_auth),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "resume-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// 404 handler for unmatched routes
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error("resource not found"))
}
