use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{ScheduleService, entry_problems, load_schedule};
use crate::models::schedules::requests::{CreateScheduleRequest, DuplicateScheduleRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::tenant;

pub async fn duplicate_schedule(
    service: &ScheduleService,
    request: &HttpRequest,
    id: i64,
    overrides: DuplicateScheduleRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    let source = match load_schedule(storage.as_ref(), &user, id).await {
        Ok(entry) => entry,
        Err(resp) => return Ok(resp),
    };

    // 复制到原条目所在学校
    let school_id = source.school_id;
    let copy = CreateScheduleRequest {
        room_id: overrides.room_id.unwrap_or(source.room_id),
        teacher_id: overrides.teacher_id.unwrap_or(source.teacher_id),
        subject: source.subject,
        day: overrides.day.unwrap_or(source.day),
        start_time: overrides.start_time.unwrap_or(source.start_time),
        end_time: overrides.end_time.unwrap_or(source.end_time),
        academic_year: overrides.academic_year.unwrap_or(source.academic_year),
        school_id: Some(school_id),
    };

    match entry_problems(storage.as_ref(), &copy, school_id).await {
        Ok(problems) if problems.is_empty() => {}
        Ok(problems) => return Ok(tenant::validation_failed(problems)),
        Err(e) => return Ok(tenant::internal_error("Failed to validate schedule entry", &e)),
    }

    match storage.create_schedule(school_id, copy).await {
        Ok(created) => {
            info!("Schedule entry {} duplicated as {}", id, created.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                created,
                "Schedule entry duplicated successfully",
            )))
        }
        Err(e) => Ok(tenant::write_error(
            ErrorCode::CreationFailed,
            "Schedule entry conflicts with an existing record",
            &e,
        )),
    }
}
