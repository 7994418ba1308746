use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StaffService;
use crate::middlewares::RequirePermission;
use crate::models::staff::{
    entities::StaffMember, requests::CreateStaffRequest, responses::StaffCreatedResponse,
};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{accounts, tenant};

pub async fn create_staff(
    service: &StaffService,
    request: &HttpRequest,
    staff_data: CreateStaffRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    if let Err(errors) = staff_data.validate() {
        return Ok(tenant::validation_failed(errors));
    }

    // 员工只能授予自己已有的权限
    if user.role == UserRole::Staff {
        let own = RequirePermission::extract_permissions(request).unwrap_or_default();
        if let Some(extra) = staff_data
            .permissions
            .iter()
            .find(|p| !own.allows(p.category, p.action))
        {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::PermissionDenied,
                format!(
                    "Cannot grant a permission you do not hold: {}.{}",
                    extra.category, extra.action
                ),
            )));
        }
    }

    let school_id =
        match tenant::target_school(storage.as_ref(), &user, staff_data.school_id).await {
            Ok(id) => id,
            Err(resp) => return Ok(resp),
        };

    let email = staff_data.email.trim();
    if let Err(resp) = accounts::ensure_email_free(storage.as_ref(), email).await {
        return Ok(resp);
    }

    let (account, credentials) = match accounts::provision_account(
        Some(school_id),
        email,
        UserRole::Staff,
        Some(staff_data.display_name.trim().to_string()),
    ) {
        Ok(provisioned) => provisioned,
        Err(resp) => return Ok(resp),
    };

    match storage.create_staff(account, &staff_data.permissions).await {
        Ok((created, permissions)) => {
            info!(
                "Staff member {} created in school {} by user {}",
                created.email, school_id, user.id
            );
            let Some(staff) = StaffMember::from_user(created, permissions) else {
                return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::CreationFailed,
                    "Created staff account has no school",
                )));
            };
            Ok(HttpResponse::Created().json(ApiResponse::success(
                StaffCreatedResponse { staff, credentials },
                "Staff member created successfully",
            )))
        }
        Err(e) => Ok(tenant::write_error(
            ErrorCode::CreationFailed,
            "An account with this email already exists",
            &e,
        )),
    }
}
