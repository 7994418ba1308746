use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{StudentService, check_room};
use crate::models::students::requests::CreateStudentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::tenant;

pub async fn create_student(
    service: &StudentService,
    request: &HttpRequest,
    student_data: CreateStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    if let Err(errors) = student_data.validate() {
        return Ok(tenant::validation_failed(errors));
    }

    let school_id =
        match tenant::target_school(storage.as_ref(), &user, student_data.school_id).await {
            Ok(id) => id,
            Err(resp) => return Ok(resp),
        };
    if let Err(resp) = check_room(storage.as_ref(), student_data.room_id, school_id).await {
        return Ok(resp);
    }

    match storage.create_student(school_id, student_data).await {
        Ok(student) => {
            info!(
                "Student {} created in school {} by user {}",
                student.matricule, school_id, user.id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                student,
                "Student created successfully",
            )))
        }
        Err(e) => Ok(tenant::write_error(
            ErrorCode::CreationFailed,
            "Matricule already exists in this school",
            &e,
        )),
    }
}
