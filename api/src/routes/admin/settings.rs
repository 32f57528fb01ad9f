use actix_web::{web, HttpResponse};
use resume_shared::ApiResponse;
use validator::Validate;

use crate::dto::auth::ChangePasswordRequest;
use crate::handlers::error::ApiResult;
use crate::middleware::auth::AdminContext;
use crate::state::AppState;

/// Handler for PUT /api/admin/settings/password
///
/// Changes the password of the account the admin token was issued to.
///
/// ## Errors
/// - 400 Bad Request: New password shorter than 6 characters
/// - 401 Unauthorized: Current password does not match
/// - 403 Forbidden: Deployment is read-only
/// - 404 Not Found: Account no longer exists
pub async fn change_password(
    state: web::Data<AppState>,
    admin: AdminContext,
    body: web::Json<ChangePasswordRequest>,
) -> ApiResult<HttpResponse> {
    state.ensure_writable()?;

    let request = body.into_inner();
    request.validate()?;

    state
        .auth_service
        .change_password(admin.user_id, &request.current_password, &request.new_password)
        .await?;

    log::info!("Password changed for {}", admin.username);
    Ok(HttpResponse::Ok().json(ApiResponse::ok("password updated")))
}
