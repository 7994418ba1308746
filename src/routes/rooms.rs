use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequirePermission};
use crate::models::permissions::{PermissionAction, PermissionCategory};
use crate::models::rooms::requests::{CreateRoomRequest, RoomListParams, UpdateRoomRequest};
use crate::services::RoomService;
use crate::utils::SafeIDI64;

// 懒加载的全局 RoomService 实例
static ROOM_SERVICE: Lazy<RoomService> = Lazy::new(RoomService::new_lazy);

fn gate(action: PermissionAction) -> RequirePermission {
    RequirePermission::new(PermissionCategory::Rooms, action)
}

pub async fn list_rooms(
    req: HttpRequest,
    query: web::Query<RoomListParams>,
) -> ActixResult<HttpResponse> {
    ROOM_SERVICE.list_rooms(&req, query.into_inner()).await
}

pub async fn create_room(
    req: HttpRequest,
    room_data: web::Json<CreateRoomRequest>,
) -> ActixResult<HttpResponse> {
    ROOM_SERVICE.create_room(&req, room_data.into_inner()).await
}

pub async fn get_room(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    ROOM_SERVICE.get_room(&req, id.0).await
}

pub async fn update_room(
    req: HttpRequest,
    id: SafeIDI64,
    update_data: web::Json<UpdateRoomRequest>,
) -> ActixResult<HttpResponse> {
    ROOM_SERVICE
        .update_room(&req, id.0, update_data.into_inner())
        .await
}

pub async fn delete_room(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    ROOM_SERVICE.delete_room(&req, id.0).await
}

// 配置路由
pub fn configure_room_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/rooms")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_rooms).wrap(gate(PermissionAction::View)))
                    .route(
                        web::post()
                            .to(create_room)
                            .wrap(gate(PermissionAction::Create)),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_room).wrap(gate(PermissionAction::View)))
                    .route(web::put().to(update_room).wrap(gate(PermissionAction::Edit)))
                    .route(
                        web::delete()
                            .to(delete_room)
                            .wrap(gate(PermissionAction::Delete)),
                    ),
            ),
    );
}
