use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SchoolService;
use crate::models::schools::{requests::CreateSchoolRequest, responses::SchoolCreatedResponse};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{accounts, tenant};

pub async fn create_school(
    service: &SchoolService,
    request: &HttpRequest,
    school_data: CreateSchoolRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    // 学校即租户本身，只能由平台层创建
    if !user.role.is_cross_tenant() {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::PermissionDenied,
            "Only platform administrators can create schools",
        )));
    }

    if let Err(errors) = school_data.validate() {
        return Ok(tenant::validation_failed(errors));
    }

    // 可选的学校管理员账号
    let mut admin_credentials = None;
    let admin_account = match &school_data.admin {
        Some(admin) => {
            let email = admin.email.trim();
            if let Err(resp) = accounts::ensure_email_free(storage.as_ref(), email).await {
                return Ok(resp);
            }
            match accounts::provision_account(
                None,
                email,
                UserRole::SchoolAdmin,
                admin.display_name.clone(),
            ) {
                Ok((account, credentials)) => {
                    admin_credentials = Some(credentials);
                    Some(account)
                }
                Err(resp) => return Ok(resp),
            }
        }
        None => None,
    };

    match storage.create_school(school_data, admin_account).await {
        Ok((school, admin)) => {
            info!(
                "School {} ({}) created, admin account: {}",
                school.name,
                school.code,
                admin.as_ref().map(|u| u.email.as_str()).unwrap_or("none")
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                SchoolCreatedResponse {
                    school,
                    admin_credentials,
                },
                "School created successfully",
            )))
        }
        Err(e) if e.is_unique_violation() => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::SchoolAlreadyExists, "School code already exists"),
        )),
        Err(e) => Ok(tenant::write_error(
            ErrorCode::CreationFailed,
            "School creation failed",
            &e,
        )),
    }
}
