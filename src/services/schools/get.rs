use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SchoolService;
use crate::models::ApiResponse;
use crate::services::tenant;

pub async fn get_school(
    service: &SchoolService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    match storage.get_school_by_id(id).await {
        Ok(Some(school)) => {
            if let Err(resp) = tenant::ensure_visible(&user, school.id, "School") {
                return Ok(resp);
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                school,
                "School retrieved successfully",
            )))
        }
        Ok(None) => Ok(tenant::not_found("School")),
        Err(e) => Ok(tenant::internal_error("Failed to retrieve school", &e)),
    }
}
