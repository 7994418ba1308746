//! 课表批量创建
//!
//! - 非原子模式：逐条独立创建，失败条目按下标报告，已创建的不回滚。
//! - 原子模式：先校验全部条目，任一不合法则不写入；随后在单个事务中写入，
//!   写入失败同样整体回滚。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::{ScheduleService, entry_problems};
use crate::models::schedules::{
    requests::BatchScheduleRequest,
    responses::{BatchFailure, BatchScheduleResponse},
};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::tenant;
use crate::utils::validate::join_field_errors;

pub async fn create_batch(
    service: &ScheduleService,
    request: &HttpRequest,
    batch: BatchScheduleRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    if batch.entries.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "entries must not be empty",
        )));
    }

    // 条目上的 school_id 被忽略，以批次为准
    let school_id = match tenant::target_school(storage.as_ref(), &user, batch.school_id).await {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };

    let requested = batch.entries.len();
    let mut failed = Vec::new();
    let mut valid = Vec::with_capacity(requested);
    for (index, entry) in batch.entries.into_iter().enumerate() {
        match entry_problems(storage.as_ref(), &entry, school_id).await {
            Ok(problems) if problems.is_empty() => valid.push((index, entry)),
            Ok(problems) => failed.push(BatchFailure {
                index,
                message: join_field_errors(&problems),
            }),
            Err(e) => {
                return Ok(tenant::internal_error("Failed to validate schedule entry", &e));
            }
        }
    }

    if batch.atomic {
        if !failed.is_empty() {
            warn!(
                "Atomic schedule batch rejected: {} of {} entries invalid",
                failed.len(),
                requested
            );
            let message = format!(
                "{} of {} entries are invalid, nothing created",
                failed.len(),
                requested
            );
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error(
                ErrorCode::ValidationFailed,
                BatchScheduleResponse {
                    requested,
                    created: Vec::new(),
                    failed,
                    atomic: true,
                },
                message,
            )));
        }

        let entries = valid.into_iter().map(|(_, entry)| entry).collect();
        return match storage.create_schedules_atomic(school_id, entries).await {
            Ok(created) => {
                info!(
                    "Atomic schedule batch of {} created in school {}",
                    created.len(),
                    school_id
                );
                Ok(HttpResponse::Created().json(ApiResponse::success(
                    BatchScheduleResponse {
                        requested,
                        created,
                        failed,
                        atomic: true,
                    },
                    "Schedule entries created successfully",
                )))
            }
            Err(e) => Ok(tenant::write_error(
                ErrorCode::CreationFailed,
                "Schedule batch conflicts with an existing record, nothing created",
                &e,
            )),
        };
    }

    let mut created = Vec::with_capacity(valid.len());
    for (index, entry) in valid {
        match storage.create_schedule(school_id, entry).await {
            Ok(entry) => created.push(entry),
            Err(e) => failed.push(BatchFailure {
                index,
                message: e.message().to_string(),
            }),
        }
    }
    failed.sort_by_key(|f| f.index);

    let response = BatchScheduleResponse {
        requested,
        created,
        failed,
        atomic: false,
    };
    info!(
        "Schedule batch in school {}: {} created, {} failed",
        school_id,
        response.created.len(),
        response.failed_count()
    );

    if response.failed.is_empty() {
        Ok(HttpResponse::Created().json(ApiResponse::success(
            response,
            "Schedule entries created successfully",
        )))
    } else {
        let message = format!(
            "{} of {} entries failed",
            response.failed_count(),
            response.requested
        );
        Ok(HttpResponse::Ok().json(ApiResponse::error(
            ErrorCode::BatchPartiallyFailed,
            response,
            message,
        )))
    }
}
