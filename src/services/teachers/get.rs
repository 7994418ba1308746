use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{TeacherService, load_teacher};
use crate::models::ApiResponse;
use crate::services::tenant;

pub async fn get_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    match load_teacher(storage.as_ref(), &user, id).await {
        Ok(teacher) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            teacher,
            "Teacher retrieved successfully",
        ))),
        Err(resp) => Ok(resp),
    }
}
