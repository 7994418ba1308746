use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StaffService;
use crate::models::staff::{entities::StaffMember, requests::StaffListParams};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ListQuery, ListResponse, apply_list_view};
use crate::services::tenant;

pub async fn list_staff(
    service: &StaffService,
    request: &HttpRequest,
    query: StaffListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let scope = tenant::read_scope(&user, query.school_id);

    let users = match storage.list_users_by_role(scope, UserRole::Staff).await {
        Ok(users) => users,
        Err(e) => return Ok(tenant::internal_error("Failed to retrieve staff list", &e)),
    };
    let mut grants = match storage.list_school_staff_permissions(scope).await {
        Ok(grants) => grants,
        Err(e) => return Ok(tenant::internal_error("Failed to retrieve permissions", &e)),
    };

    let staff: Vec<StaffMember> = users
        .into_iter()
        .filter_map(|u| {
            let permissions = grants.remove(&u.id).unwrap_or_default();
            StaffMember::from_user(u, permissions)
        })
        .collect();

    let response = ListResponse::new(apply_list_view(staff, &ListQuery::from(query)));
    let message = response.message("Staff list retrieved successfully");
    Ok(HttpResponse::Ok().json(ApiResponse::success(response, message)))
}
