use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RoomService;
use crate::models::rooms::requests::RoomListParams;
use crate::models::{ApiResponse, ListQuery, ListResponse, apply_list_view};
use crate::services::tenant;

pub async fn list_rooms(
    service: &RoomService,
    request: &HttpRequest,
    query: RoomListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    match storage
        .list_rooms(tenant::read_scope(&user, query.school_id))
        .await
    {
        Ok(rooms) => {
            let response = ListResponse::new(apply_list_view(rooms, &ListQuery::from(query)));
            let message = response.message("Room list retrieved successfully");
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, message)))
        }
        Err(e) => Ok(tenant::internal_error("Failed to retrieve room list", &e)),
    }
}
