use actix_web::{web, HttpResponse};
use resume_shared::ApiResponse;

use crate::dto::auth::{VerifyRequest, VerifyResponse};
use crate::handlers::error::ApiResult;
use crate::state::AppState;

/// Handler for POST /api/verify
///
/// Exchanges a visitor secret for a visitor token. `verification_type` is one
/// of `password`, `name`, `email` or `phone`; the last three are matched
/// against the public profile.
///
/// ## Errors
/// - 400 Bad Request: Unknown verification type or empty value
/// - 401 Unauthorized: No match
pub async fn verify(
    state: web::Data<AppState>,
    body: web::Json<VerifyRequest>,
) -> ApiResult<HttpResponse> {
    let request = body.into_inner();

    let token = state
        .visitor_service
        .verify(&request.verification_type, &request.value)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "verification successful",
        VerifyResponse {
            success: true,
            token,
        },
    )))
}
