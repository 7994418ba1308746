use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::{Listable, SortValue};

define_str_enum! {
    /// 学校状态
    #[ts(export, export_to = "../frontend/src/types/generated/school.ts")]
    pub enum SchoolStatus {
        Active => "active",
        Suspended => "suspended",
    }
}

/// 学校（租户本身）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/school.ts")]
pub struct School {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub status: SchoolStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Listable for School {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.code.as_str()]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            "status" => Some(self.status.to_string()),
            _ => None,
        }
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "name" => Some(self.name.as_str().into()),
            "code" => Some(self.code.as_str().into()),
            "created_at" => Some(self.created_at.timestamp().into()),
            _ => None,
        }
    }
}
