use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{StaffService, load_staff_user};
use crate::models::ApiResponse;
use crate::middlewares::RequireJWT;
use crate::services::tenant;

pub async fn delete_staff(
    service: &StaffService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = load_staff_user(storage.as_ref(), &user, id).await {
        return Ok(resp);
    }

    match storage.delete_user(id).await {
        Ok(true) => {
            RequireJWT::evict_session(request, id).await;
            info!("Staff member {} deleted by user {}", id, user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Staff member deleted successfully",
            )))
        }
        Ok(false) => Ok(tenant::not_found("Staff member")),
        Err(e) => Ok(tenant::internal_error("Failed to delete staff member", &e)),
    }
}
