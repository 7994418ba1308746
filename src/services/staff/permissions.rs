use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{StaffService, load_staff_user};
use crate::models::{
    ApiResponse, ErrorCode,
    staff::{entities::StaffMember, requests::UpdatePermissionsRequest},
};
use crate::services::tenant;

pub async fn update_permissions(
    service: &StaffService,
    request: &HttpRequest,
    id: i64,
    update_data: UpdatePermissionsRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    let staff_user = match load_staff_user(storage.as_ref(), &user, id).await {
        Ok(staff_user) => staff_user,
        Err(resp) => return Ok(resp),
    };
    let Some(school_id) = staff_user.school_id else {
        return Ok(tenant::not_found("Staff member"));
    };

    match storage
        .replace_staff_permissions(id, school_id, &update_data.permissions)
        .await
    {
        Ok(permissions) => {
            info!(
                "Permissions of staff member {} replaced by user {} ({} grants)",
                id,
                user.id,
                permissions.len()
            );
            match StaffMember::from_user(staff_user, permissions) {
                Some(staff) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                    staff,
                    "Permissions updated successfully",
                ))),
                None => Ok(tenant::not_found("Staff member")),
            }
        }
        Err(e) => Ok(tenant::write_error(
            ErrorCode::UpdateFailed,
            "Permissions update failed",
            &e,
        )),
    }
}
