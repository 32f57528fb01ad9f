use actix_web::{web, HttpResponse};
use resume_shared::ApiResponse;
use validator::Validate;

use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::handlers::error::ApiResult;
use crate::state::AppState;

/// Handler for POST /api/login
///
/// Exchanges admin credentials for an admin token.
///
/// # Request Body
///
/// ```json
/// { "username": "admin", "password": "admin123" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "success": true, "message": "login successful", "data": { "token": "eyJ..." } }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing username or password
/// - 401 Unauthorized: Unknown user or wrong password (same message for both)
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let request = body.into_inner();
    request.validate()?;

    let token = state
        .auth_service
        .login(&request.username, &request.password)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "login successful",
        LoginResponse { token },
    )))
}
