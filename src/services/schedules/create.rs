use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{ScheduleService, entry_problems};
use crate::models::schedules::requests::CreateScheduleRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::tenant;

pub async fn create_schedule(
    service: &ScheduleService,
    request: &HttpRequest,
    entry: CreateScheduleRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    let school_id = match tenant::target_school(storage.as_ref(), &user, entry.school_id).await {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };

    match entry_problems(storage.as_ref(), &entry, school_id).await {
        Ok(problems) if problems.is_empty() => {}
        Ok(problems) => return Ok(tenant::validation_failed(problems)),
        Err(e) => return Ok(tenant::internal_error("Failed to validate schedule entry", &e)),
    }

    match storage.create_schedule(school_id, entry).await {
        Ok(created) => {
            info!(
                "Schedule entry {} {} {}-{} created in school {}",
                created.subject, created.day, created.start_time, created.end_time, school_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                created,
                "Schedule entry created successfully",
            )))
        }
        Err(e) => Ok(tenant::write_error(
            ErrorCode::CreationFailed,
            "Schedule entry conflicts with an existing record",
            &e,
        )),
    }
}
