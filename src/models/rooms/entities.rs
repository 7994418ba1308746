use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::{Listable, SortValue};

/// 教室 / 班级
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/room.ts")]
pub struct Room {
    pub id: i64,
    pub school_id: i64,
    pub name: String,
    pub capacity: i32,
    pub building: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Listable for Room {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        if let Some(building) = &self.building {
            fields.push(building.as_str());
        }
        fields
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            "building" => self.building.clone(),
            _ => None,
        }
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "name" => Some(self.name.as_str().into()),
            "capacity" => Some(i64::from(self.capacity).into()),
            "building" => self.building.as_deref().map(SortValue::from),
            _ => None,
        }
    }
}
