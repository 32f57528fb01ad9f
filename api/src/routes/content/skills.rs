use actix_web::{web, HttpResponse};
use resume_shared::ApiResponse;

use crate::handlers::error::ApiResult;
use crate::state::AppState;

/// GET /api/skills and GET /api/admin/skills
///
/// Skills are listed grouped under their categories.
pub async fn list_skill_categories(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let categories = state.skill_categories.list_categories().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("skills retrieved", categories)))
}
