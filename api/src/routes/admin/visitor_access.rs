//! Visitor password management. Every handler requires the `admin` role.

use actix_web::{web, HttpResponse};
use resume_core::NewVisitorAccess;
use resume_shared::ApiResponse;

use crate::dto::visitor::AddVisitorAccessRequest;
use crate::handlers::error::ApiResult;
use crate::middleware::auth::RequireAdmin;
use crate::state::AppState;

/// GET /api/admin/visitor/access
pub async fn list_access(
    state: web::Data<AppState>,
    _admin: RequireAdmin,
) -> ApiResult<HttpResponse> {
    let entries = state.visitor_service.list_access().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("visitor access retrieved", entries)))
}

/// POST /api/admin/visitor/access
///
/// Only `password` entries can be added; a duplicate value is rejected.
pub async fn add_access(
    state: web::Data<AppState>,
    _admin: RequireAdmin,
    body: web::Json<AddVisitorAccessRequest>,
) -> ApiResult<HttpResponse> {
    state.ensure_writable()?;

    let entry = NewVisitorAccess::try_from(body.into_inner())?;
    let stored = state.visitor_service.add_access(entry).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success("visitor access added", stored)))
}

/// DELETE /api/admin/visitor/access/{id}
pub async fn delete_access(
    state: web::Data<AppState>,
    _admin: RequireAdmin,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state.ensure_writable()?;

    state.visitor_service.delete_access(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok("visitor access deleted")))
}
