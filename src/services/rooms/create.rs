use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::RoomService;
use crate::models::rooms::requests::CreateRoomRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::tenant;

pub async fn create_room(
    service: &RoomService,
    request: &HttpRequest,
    room_data: CreateRoomRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    if let Err(errors) = room_data.validate() {
        return Ok(tenant::validation_failed(errors));
    }

    let school_id = match tenant::target_school(storage.as_ref(), &user, room_data.school_id).await
    {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };

    match storage.create_room(school_id, room_data).await {
        Ok(room) => {
            info!("Room {} created in school {}", room.name, school_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(room, "Room created successfully")))
        }
        Err(e) => Ok(tenant::write_error(
            ErrorCode::CreationFailed,
            "Room name already exists in this school",
            &e,
        )),
    }
}
