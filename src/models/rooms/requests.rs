use serde::Deserialize;
use ts_rs::TS;

use crate::models::{ListQuery, SortOrder};
use crate::utils::validate::{FieldError, Validator};

fn capacity_rule(capacity: i32) -> Result<(), &'static str> {
    if capacity <= 0 {
        return Err("Capacity must be greater than 0");
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/room.ts")]
pub struct CreateRoomRequest {
    pub name: String,
    pub capacity: i32,
    pub building: Option<String>,
    pub school_id: Option<i64>,
}

impl CreateRoomRequest {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        Validator::new()
            .required("name", &self.name)
            .rule("capacity", capacity_rule(self.capacity))
            .finish()
    }
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/room.ts")]
pub struct UpdateRoomRequest {
    pub name: Option<String>,
    pub capacity: Option<i32>,
    pub building: Option<String>,
}

impl UpdateRoomRequest {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut v = Validator::new();
        if let Some(name) = &self.name {
            v.required("name", name);
        }
        if let Some(capacity) = self.capacity {
            v.rule("capacity", capacity_rule(capacity));
        }
        v.finish()
    }
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/room.ts")]
pub struct RoomListParams {
    pub search: Option<String>,
    pub building: Option<String>,
    pub school_id: Option<i64>,
    pub sort: Option<String>,
    pub order: Option<SortOrder>,
}

impl From<RoomListParams> for ListQuery {
    fn from(p: RoomListParams) -> Self {
        ListQuery::new()
            .search(p.search)
            .filter("building", p.building)
            .sort_by(p.sort, p.order)
    }
}
