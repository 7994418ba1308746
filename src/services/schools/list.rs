use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SchoolService;
use crate::models::schools::requests::SchoolListParams;
use crate::models::{ApiResponse, ListQuery, ListResponse, apply_list_view};
use crate::services::tenant;

pub async fn list_schools(
    service: &SchoolService,
    request: &HttpRequest,
    query: SchoolListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    // 学校管理员只能看到自己的学校
    match storage.list_schools(tenant::read_scope(&user, None)).await {
        Ok(schools) => {
            let response = ListResponse::new(apply_list_view(schools, &ListQuery::from(query)));
            let message = response.message("School list retrieved successfully");
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, message)))
        }
        Err(e) => Ok(tenant::internal_error("Failed to retrieve school list", &e)),
    }
}
