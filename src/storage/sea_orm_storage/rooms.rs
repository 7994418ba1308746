use super::{SeaOrmStorage, db_error};
use crate::entity::rooms::{ActiveModel, Column, Entity as Rooms};
use crate::errors::Result;
use crate::models::rooms::{
    entities::Room,
    requests::{CreateRoomRequest, UpdateRoomRequest},
};
use crate::storage::SchoolFilter;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_room_impl(&self, school_id: i64, req: CreateRoomRequest) -> Result<Room> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            school_id: Set(school_id),
            name: Set(req.name.trim().to_string()),
            capacity: Set(req.capacity),
            building: Set(req.building),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("创建教室失败"))?;

        Ok(result.into_room())
    }

    pub async fn get_room_by_id_impl(&self, id: i64) -> Result<Option<Room>> {
        let result = Rooms::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("查询教室失败"))?;

        Ok(result.map(|m| m.into_room()))
    }

    pub async fn list_rooms_impl(&self, school: SchoolFilter) -> Result<Vec<Room>> {
        let mut select = Rooms::find();
        if let Some(school_id) = school {
            select = select.filter(Column::SchoolId.eq(school_id));
        }

        let rooms = select
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(db_error("查询教室列表失败"))?;

        Ok(rooms.into_iter().map(|m| m.into_room()).collect())
    }

    pub async fn update_room_impl(
        &self,
        id: i64,
        update: UpdateRoomRequest,
    ) -> Result<Option<Room>> {
        if self.get_room_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name.trim().to_string());
        }
        if let Some(capacity) = update.capacity {
            model.capacity = Set(capacity);
        }
        if let Some(building) = update.building {
            model.building = Set(Some(building));
        }

        model
            .update(&self.db)
            .await
            .map_err(db_error("更新教室失败"))?;

        self.get_room_by_id_impl(id).await
    }

    pub async fn delete_room_impl(&self, id: i64) -> Result<bool> {
        let result = Rooms::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error("删除教室失败"))?;

        Ok(result.rows_affected > 0)
    }
}
