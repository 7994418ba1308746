use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{TeacherService, load_teacher};
use crate::models::{ApiResponse, ErrorCode};
use crate::middlewares::RequireJWT;
use crate::services::tenant;

pub async fn delete_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    let teacher = match load_teacher(storage.as_ref(), &user, id).await {
        Ok(teacher) => teacher,
        Err(resp) => return Ok(resp),
    };

    match storage.delete_teacher(id).await {
        Ok(true) => {
            if let Some(account_id) = teacher.user_id {
                RequireJWT::evict_session(request, account_id).await;
            }
            info!("Teacher {} deleted by user {}", id, user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Teacher deleted successfully")))
        }
        Ok(false) => Ok(tenant::not_found("Teacher")),
        Err(e) => Ok(tenant::write_error(
            ErrorCode::DeleteFailed,
            "Teacher is still referenced",
            &e,
        )),
    }
}
