use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{RoomService, load_room};
use crate::models::ApiResponse;
use crate::services::tenant;

pub async fn get_room(
    service: &RoomService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    match load_room(storage.as_ref(), &user, id).await {
        Ok(room) => Ok(HttpResponse::Ok().json(ApiResponse::success(room, "Room retrieved successfully"))),
        Err(resp) => Ok(resp),
    }
}
