use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::permissions::Permission;
use crate::models::users::entities::{User, UserStatus};
use crate::models::{Listable, SortValue};

/// 员工：角色为 staff 的用户账号及其显式授权
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/staff.ts")]
pub struct StaffMember {
    pub id: i64,
    pub school_id: i64,
    pub email: String,
    pub display_name: Option<String>,
    pub status: UserStatus,
    pub permissions: Vec<Permission>,
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl StaffMember {
    /// 由用户账号与授权组合；用户必须属于某个学校
    pub fn from_user(user: User, permissions: Vec<Permission>) -> Option<Self> {
        Some(Self {
            id: user.id,
            school_id: user.school_id?,
            email: user.email,
            display_name: user.display_name,
            status: user.status,
            permissions,
            last_login: user.last_login,
            created_at: user.created_at,
            updated_at: user.updated_at,
        })
    }
}

impl Listable for StaffMember {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.email.as_str()];
        if let Some(name) = &self.display_name {
            fields.push(name.as_str());
        }
        fields
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            "status" => Some(self.status.to_string()),
            _ => None,
        }
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "email" => Some(self.email.as_str().into()),
            "display_name" => self.display_name.as_deref().map(SortValue::from),
            "created_at" => Some(self.created_at.timestamp().into()),
            _ => None,
        }
    }
}
