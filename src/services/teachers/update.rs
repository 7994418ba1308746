use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{TeacherService, load_teacher};
use crate::models::teachers::requests::UpdateTeacherRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::middlewares::RequireJWT;
use crate::services::{accounts, tenant};
use crate::storage::UserUpdate;

pub async fn update_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    id: i64,
    update_data: UpdateTeacherRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    let existing = match load_teacher(storage.as_ref(), &user, id).await {
        Ok(teacher) => teacher,
        Err(resp) => return Ok(resp),
    };
    if let Err(errors) = update_data.validate() {
        return Ok(tenant::validation_failed(errors));
    }

    // 邮箱变更时同步登录账号
    let new_email = update_data
        .email
        .as_deref()
        .map(str::trim)
        .filter(|email| *email != existing.email)
        .map(str::to_string);
    if let Some(email) = &new_email {
        if let Err(resp) = accounts::ensure_email_free(storage.as_ref(), email).await {
            return Ok(resp);
        }
        if let Some(account_id) = existing.user_id {
            let account_update = UserUpdate {
                email: Some(email.clone()),
                ..Default::default()
            };
            if let Err(e) = storage.update_user(account_id, account_update).await {
                return Ok(tenant::write_error(
                    ErrorCode::UpdateFailed,
                    "An account with this email already exists",
                    &e,
                ));
            }
            RequireJWT::evict_session(request, account_id).await;
        }
    }

    match storage.update_teacher(id, update_data).await {
        Ok(Some(teacher)) => {
            info!("Teacher {} updated by user {}", id, user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                teacher,
                "Teacher updated successfully",
            )))
        }
        Ok(None) => Ok(tenant::not_found("Teacher")),
        Err(e) => Ok(tenant::write_error(
            ErrorCode::UpdateFailed,
            "Teacher update conflicts with an existing record",
            &e,
        )),
    }
}
