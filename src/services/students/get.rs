use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{StudentService, load_student};
use crate::models::ApiResponse;
use crate::services::tenant;

pub async fn get_student(
    service: &StudentService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    match load_student(storage.as_ref(), &user, id).await {
        Ok(student) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            student,
            "Student retrieved successfully",
        ))),
        Err(resp) => Ok(resp),
    }
}
