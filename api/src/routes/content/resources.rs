//! CRUD handlers shared by skills, experiences, projects and certificates.

use std::sync::Arc;

use actix_web::{web, HttpResponse, Scope};
use resume_core::{
    errors::DomainError, repositories::ResourceRepository, Certificate, Experience, Project,
    Resource, Skill,
};
use resume_shared::ApiResponse;

use crate::handlers::error::ApiResult;
use crate::middleware::auth::AdminContext;
use crate::state::AppState;

/// A resource whose repository lives in [`AppState`]
pub trait ContentResource: Resource {
    fn repository(state: &AppState) -> &Arc<dyn ResourceRepository<Self>>;
}

impl ContentResource for Skill {
    fn repository(state: &AppState) -> &Arc<dyn ResourceRepository<Self>> {
        &state.skills
    }
}

impl ContentResource for Experience {
    fn repository(state: &AppState) -> &Arc<dyn ResourceRepository<Self>> {
        &state.experiences
    }
}

impl ContentResource for Project {
    fn repository(state: &AppState) -> &Arc<dyn ResourceRepository<Self>> {
        &state.projects
    }
}

impl ContentResource for Certificate {
    fn repository(state: &AppState) -> &Arc<dyn ResourceRepository<Self>> {
        &state.certificates
    }
}

pub async fn list<R: ContentResource>(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let records = R::repository(&state).list().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        format!("{} list retrieved", R::LABEL),
        records,
    )))
}

pub async fn get_one<R: ContentResource>(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let record = R::repository(&state)
        .find_by_id(path.into_inner())
        .await?
        .ok_or_else(|| DomainError::not_found(R::LABEL))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        format!("{} retrieved", R::LABEL),
        record,
    )))
}

pub async fn create<R: ContentResource>(
    state: web::Data<AppState>,
    admin: AdminContext,
    body: web::Json<R>,
) -> ApiResult<HttpResponse> {
    state.ensure_writable()?;

    let stored = R::repository(&state).create(body.into_inner()).await?;
    log::info!("{} {} created by {}", R::LABEL, stored.id(), admin.username);

    Ok(HttpResponse::Created().json(ApiResponse::success(
        format!("{} created", R::LABEL),
        stored,
    )))
}

/// The id in the path wins over any id in the body.
pub async fn update<R: ContentResource>(
    state: web::Data<AppState>,
    admin: AdminContext,
    path: web::Path<i64>,
    body: web::Json<R>,
) -> ApiResult<HttpResponse> {
    state.ensure_writable()?;

    let id = path.into_inner();
    let mut record = body.into_inner();
    record.set_id(id);

    let stored = R::repository(&state)
        .update(id, record)
        .await?
        .ok_or_else(|| DomainError::not_found(R::LABEL))?;
    log::info!("{} {} updated by {}", R::LABEL, id, admin.username);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        format!("{} updated", R::LABEL),
        stored,
    )))
}

pub async fn delete<R: ContentResource>(
    state: web::Data<AppState>,
    admin: AdminContext,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state.ensure_writable()?;

    let id = path.into_inner();
    if !R::repository(&state).delete(id).await? {
        return Err(DomainError::not_found(R::LABEL).into());
    }
    log::info!("{} {} deleted by {}", R::LABEL, id, admin.username);

    Ok(HttpResponse::Ok().json(ApiResponse::ok(format!("{} deleted", R::LABEL))))
}

/// Create, read by id, update and delete under `path`.
///
/// The list route is left to the caller because skills are listed by
/// category.
pub fn admin_resource_scope<R: ContentResource>(path: &str) -> Scope {
    web::scope(path)
        .route("", web::post().to(create::<R>))
        .route("/{id}", web::get().to(get_one::<R>))
        .route("/{id}", web::put().to(update::<R>))
        .route("/{id}", web::delete().to(delete::<R>))
}

/// Read by id under `path`
pub fn visitor_resource_scope<R: ContentResource>(path: &str) -> Scope {
    web::scope(path).route("/{id}", web::get().to(get_one::<R>))
}
