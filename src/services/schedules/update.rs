use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{ScheduleService, entry_problems, load_schedule};
use crate::models::schedules::requests::{CreateScheduleRequest, UpdateScheduleRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::tenant;

pub async fn update_schedule(
    service: &ScheduleService,
    request: &HttpRequest,
    id: i64,
    update_data: UpdateScheduleRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    let existing = match load_schedule(storage.as_ref(), &user, id).await {
        Ok(entry) => entry,
        Err(resp) => return Ok(resp),
    };
    if let Err(errors) = update_data.validate() {
        return Ok(tenant::validation_failed(errors));
    }

    // 合并后的条目整体校验（时间区间与引用）
    let merged = CreateScheduleRequest {
        room_id: update_data.room_id.unwrap_or(existing.room_id),
        teacher_id: update_data.teacher_id.unwrap_or(existing.teacher_id),
        subject: update_data
            .subject
            .clone()
            .unwrap_or_else(|| existing.subject.clone()),
        day: update_data.day.unwrap_or(existing.day),
        start_time: update_data
            .start_time
            .clone()
            .unwrap_or_else(|| existing.start_time.clone()),
        end_time: update_data
            .end_time
            .clone()
            .unwrap_or_else(|| existing.end_time.clone()),
        academic_year: update_data
            .academic_year
            .clone()
            .unwrap_or_else(|| existing.academic_year.clone()),
        school_id: None,
    };
    match entry_problems(storage.as_ref(), &merged, existing.school_id).await {
        Ok(problems) if problems.is_empty() => {}
        Ok(problems) => return Ok(tenant::validation_failed(problems)),
        Err(e) => return Ok(tenant::internal_error("Failed to validate schedule entry", &e)),
    }

    match storage.update_schedule(id, update_data).await {
        Ok(Some(entry)) => {
            info!("Schedule entry {} updated by user {}", id, user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                entry,
                "Schedule entry updated successfully",
            )))
        }
        Ok(None) => Ok(tenant::not_found("Schedule entry")),
        Err(e) => Ok(tenant::write_error(
            ErrorCode::UpdateFailed,
            "Schedule entry conflicts with an existing record",
            &e,
        )),
    }
}
