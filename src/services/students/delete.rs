use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{StudentService, load_student};
use crate::models::ApiResponse;
use crate::services::tenant;

pub async fn delete_student(
    service: &StudentService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = load_student(storage.as_ref(), &user, id).await {
        return Ok(resp);
    }

    match storage.delete_student(id).await {
        Ok(true) => {
            info!("Student {} deleted by user {}", id, user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Student deleted successfully")))
        }
        Ok(false) => Ok(tenant::not_found("Student")),
        Err(e) => Ok(tenant::internal_error("Failed to delete student", &e)),
    }
}
