use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SchoolService;
use crate::models::ApiResponse;
use crate::middlewares::RequireJWT;
use crate::services::tenant;

pub async fn delete_school(
    service: &SchoolService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    if let Err(resp) = tenant::ensure_visible(&user, id, "School") {
        return Ok(resp);
    }

    match storage.delete_school(id).await {
        Ok(true) => {
            // 学校下的账号随之删除
            RequireJWT::evict_all_sessions(request).await;
            info!("School {} deleted", id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("School deleted successfully")))
        }
        Ok(false) => Ok(tenant::not_found("School")),
        Err(e) => Ok(tenant::internal_error("Failed to delete school", &e)),
    }
}
