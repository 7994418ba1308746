use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::TeacherService;
use crate::models::teachers::{requests::CreateTeacherRequest, responses::TeacherCreatedResponse};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{accounts, tenant};

pub async fn create_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    teacher_data: CreateTeacherRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    if let Err(errors) = teacher_data.validate() {
        return Ok(tenant::validation_failed(errors));
    }

    let school_id =
        match tenant::target_school(storage.as_ref(), &user, teacher_data.school_id).await {
            Ok(id) => id,
            Err(resp) => return Ok(resp),
        };

    // 教师邮箱即登录账号
    let email = teacher_data.email.trim().to_string();
    if let Err(resp) = accounts::ensure_email_free(storage.as_ref(), &email).await {
        return Ok(resp);
    }

    let display_name = format!(
        "{} {}",
        teacher_data.prenom.trim(),
        teacher_data.nom.trim()
    );
    let (account, credentials) = match accounts::provision_account(
        Some(school_id),
        &email,
        UserRole::Teacher,
        Some(display_name),
    ) {
        Ok(provisioned) => provisioned,
        Err(resp) => return Ok(resp),
    };

    match storage.create_teacher(school_id, teacher_data, account).await {
        Ok(teacher) => {
            info!(
                "Teacher {} created in school {} by user {}",
                teacher.full_name(),
                school_id,
                user.id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                TeacherCreatedResponse {
                    teacher,
                    credentials,
                },
                "Teacher created successfully",
            )))
        }
        Err(e) => Ok(tenant::write_error(
            ErrorCode::CreationFailed,
            "An account with this email already exists",
            &e,
        )),
    }
}
