use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{ScheduleService, load_schedule};
use crate::models::ApiResponse;
use crate::services::tenant;

pub async fn delete_schedule(
    service: &ScheduleService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = load_schedule(storage.as_ref(), &user, id).await {
        return Ok(resp);
    }

    match storage.delete_schedule(id).await {
        Ok(true) => {
            info!("Schedule entry {} deleted by user {}", id, user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Schedule entry deleted successfully",
            )))
        }
        Ok(false) => Ok(tenant::not_found("Schedule entry")),
        Err(e) => Ok(tenant::internal_error("Failed to delete schedule entry", &e)),
    }
}
