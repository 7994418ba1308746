use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ScheduleService, load_schedule};
use crate::models::ApiResponse;
use crate::services::tenant;

pub async fn get_schedule(
    service: &ScheduleService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    match load_schedule(storage.as_ref(), &user, id).await {
        Ok(entry) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            entry,
            "Schedule entry retrieved successfully",
        ))),
        Err(resp) => Ok(resp),
    }
}
