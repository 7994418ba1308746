use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::teachers::requests::TeacherListParams;
use crate::models::{ApiResponse, ListQuery, ListResponse, apply_list_view};
use crate::services::tenant;

pub async fn list_teachers(
    service: &TeacherService,
    request: &HttpRequest,
    query: TeacherListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    match storage
        .list_teachers(tenant::read_scope(&user, query.school_id))
        .await
    {
        Ok(teachers) => {
            let response = ListResponse::new(apply_list_view(teachers, &ListQuery::from(query)));
            let message = response.message("Teacher list retrieved successfully");
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, message)))
        }
        Err(e) => Ok(tenant::internal_error("Failed to retrieve teacher list", &e)),
    }
}
