use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{StaffService, load_staff_user};
use crate::models::{
    ApiResponse, ErrorCode,
    staff::{entities::StaffMember, requests::UpdateStaffRequest},
};
use crate::middlewares::RequireJWT;
use crate::services::tenant;
use crate::storage::UserUpdate;

pub async fn update_staff(
    service: &StaffService,
    request: &HttpRequest,
    id: i64,
    update_data: UpdateStaffRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = load_staff_user(storage.as_ref(), &user, id).await {
        return Ok(resp);
    }
    if let Err(errors) = update_data.validate() {
        return Ok(tenant::validation_failed(errors));
    }

    let update = UserUpdate {
        email: update_data.email.map(|e| e.trim().to_string()),
        display_name: update_data.display_name.map(|n| n.trim().to_string()),
        status: update_data.status,
    };

    let updated = match storage.update_user(id, update).await {
        Ok(Some(updated)) => {
            RequireJWT::evict_session(request, id).await;
            updated
        }
        Ok(None) => return Ok(tenant::not_found("Staff member")),
        Err(e) => {
            return Ok(tenant::write_error(
                ErrorCode::UpdateFailed,
                "An account with this email already exists",
                &e,
            ));
        }
    };
    let permissions = match storage.list_staff_permissions(id).await {
        Ok(permissions) => permissions,
        Err(e) => return Ok(tenant::internal_error("Failed to retrieve permissions", &e)),
    };

    info!("Staff member {} updated by user {}", id, user.id);
    match StaffMember::from_user(updated, permissions) {
        Some(staff) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            staff,
            "Staff member updated successfully",
        ))),
        None => Ok(tenant::not_found("Staff member")),
    }
}
