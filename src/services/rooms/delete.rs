use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{RoomService, load_room};
use crate::models::ApiResponse;
use crate::services::tenant;

pub async fn delete_room(
    service: &RoomService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = load_room(storage.as_ref(), &user, id).await {
        return Ok(resp);
    }

    // 关联课表随之删除，学生的班级置空
    match storage.delete_room(id).await {
        Ok(true) => {
            info!("Room {} deleted by user {}", id, user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Room deleted successfully")))
        }
        Ok(false) => Ok(tenant::not_found("Room")),
        Err(e) => Ok(tenant::internal_error("Failed to delete room", &e)),
    }
}
