use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{StudentService, check_room, load_student};
use crate::models::students::requests::UpdateStudentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::tenant;

pub async fn update_student(
    service: &StudentService,
    request: &HttpRequest,
    id: i64,
    update_data: UpdateStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    let existing = match load_student(storage.as_ref(), &user, id).await {
        Ok(student) => student,
        Err(resp) => return Ok(resp),
    };
    if let Err(errors) = update_data.validate() {
        return Ok(tenant::validation_failed(errors));
    }
    if let Err(resp) = check_room(storage.as_ref(), update_data.room_id, existing.school_id).await
    {
        return Ok(resp);
    }

    match storage.update_student(id, update_data).await {
        Ok(Some(student)) => {
            info!("Student {} updated by user {}", id, user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                student,
                "Student updated successfully",
            )))
        }
        Ok(None) => Ok(tenant::not_found("Student")),
        Err(e) => Ok(tenant::write_error(
            ErrorCode::UpdateFailed,
            "Matricule already exists in this school",
            &e,
        )),
    }
}
