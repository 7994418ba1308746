pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::tenant;
use crate::models::rooms::{
    entities::Room,
    requests::{CreateRoomRequest, RoomListParams, UpdateRoomRequest},
};
use crate::models::users::entities::User;
use crate::storage::Storage;

pub struct RoomService {
    storage: Option<Arc<dyn Storage>>,
}

impl RoomService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_rooms(
        &self,
        request: &HttpRequest,
        query: RoomListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_rooms(self, request, query).await
    }

    pub async fn create_room(
        &self,
        request: &HttpRequest,
        room_data: CreateRoomRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_room(self, request, room_data).await
    }

    pub async fn get_room(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        get::get_room(self, request, id).await
    }

    pub async fn update_room(
        &self,
        request: &HttpRequest,
        id: i64,
        update_data: UpdateRoomRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_room(self, request, id, update_data).await
    }

    pub async fn delete_room(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        delete::delete_room(self, request, id).await
    }
}

pub(crate) async fn load_room(
    storage: &dyn Storage,
    user: &User,
    id: i64,
) -> Result<Room, HttpResponse> {
    match storage.get_room_by_id(id).await {
        Ok(Some(room)) => {
            tenant::ensure_visible(user, room.school_id, "Room")?;
            Ok(room)
        }
        Ok(None) => Err(tenant::not_found("Room")),
        Err(e) => Err(tenant::internal_error("Failed to retrieve room", &e)),
    }
}
