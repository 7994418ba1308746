use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{RoomService, load_room};
use crate::models::rooms::requests::UpdateRoomRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::tenant;

pub async fn update_room(
    service: &RoomService,
    request: &HttpRequest,
    id: i64,
    update_data: UpdateRoomRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = load_room(storage.as_ref(), &user, id).await {
        return Ok(resp);
    }
    if let Err(errors) = update_data.validate() {
        return Ok(tenant::validation_failed(errors));
    }

    match storage.update_room(id, update_data).await {
        Ok(Some(room)) => Ok(HttpResponse::Ok().json(ApiResponse::success(room, "Room updated successfully"))),
        Ok(None) => Ok(tenant::not_found("Room")),
        Err(e) => Ok(tenant::write_error(
            ErrorCode::UpdateFailed,
            "Room name already exists in this school",
            &e,
        )),
    }
}
