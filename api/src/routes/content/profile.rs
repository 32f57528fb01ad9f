use actix_web::{web, HttpResponse};
use resume_core::Profile;
use resume_shared::ApiResponse;

use crate::handlers::error::ApiResult;
use crate::middleware::auth::AdminContext;
use crate::state::AppState;

/// GET /api/profile and GET /api/admin/profile
///
/// An empty profile is returned, not a 404, before one has been saved.
pub async fn get_profile(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let response = match state.profiles.get().await? {
        Some(profile) => ApiResponse::success("profile retrieved", profile),
        None => ApiResponse::success("no data", Profile::default()),
    };
    Ok(HttpResponse::Ok().json(response))
}

/// PUT /api/admin/profile
///
/// Replaces the single profile record and stamps `last_updated`.
pub async fn update_profile(
    state: web::Data<AppState>,
    admin: AdminContext,
    body: web::Json<Profile>,
) -> ApiResult<HttpResponse> {
    state.ensure_writable()?;

    let mut profile = body.into_inner();
    profile.last_updated = Some(state.clock.now());

    let saved = state.profiles.upsert(profile).await?;
    log::info!("Profile updated by {}", admin.username);

    Ok(HttpResponse::Ok().json(ApiResponse::success("profile updated", saved)))
}
