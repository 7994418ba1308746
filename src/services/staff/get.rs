use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{StaffService, load_staff_user};
use crate::models::{ApiResponse, staff::entities::StaffMember};
use crate::services::tenant;

pub async fn get_staff(
    service: &StaffService,
    request: &HttpRequest,
    id: i64,
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
    let permissions = match storage.list_staff_permissions(id).await {
        Ok(permissions) => permissions,
        Err(e) => return Ok(tenant::internal_error("Failed to retrieve permissions", &e)),
    };

    match StaffMember::from_user(staff_user, permissions) {
        Some(staff) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            staff,
            "Staff member retrieved successfully",
        ))),
        None => Ok(tenant::not_found("Staff member")),
    }
}
