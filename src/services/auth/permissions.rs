use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AuthService;
use crate::middlewares::require_permission::resolve_permissions;
use crate::models::{ApiResponse, auth::responses::PermissionsResponse};
use crate::services::tenant;

pub async fn handle_permissions(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    match resolve_permissions(storage.as_ref(), &user).await {
        Ok(set) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            PermissionsResponse {
                role: user.role.to_string(),
                school_id: user.school_id,
                permissions: set.to_matrix(),
            },
            "Permissions retrieved successfully",
        ))),
        Err(e) => Ok(tenant::internal_error("Failed to load permissions", &e)),
    }
}
