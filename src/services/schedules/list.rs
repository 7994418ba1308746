use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ScheduleService;
use crate::models::schedules::requests::ScheduleListParams;
use crate::models::{ApiResponse, ListQuery, ListResponse, apply_list_view};
use crate::services::tenant;

pub async fn list_schedules(
    service: &ScheduleService,
    request: &HttpRequest,
    query: ScheduleListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    match storage
        .list_schedules(tenant::read_scope(&user, query.school_id))
        .await
    {
        Ok(entries) => {
            let response = ListResponse::new(apply_list_view(entries, &ListQuery::from(query)));
            let message = response.message("Schedule retrieved successfully");
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, message)))
        }
        Err(e) => Ok(tenant::internal_error("Failed to retrieve schedule", &e)),
    }
}
