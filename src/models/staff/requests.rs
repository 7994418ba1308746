use serde::Deserialize;
use ts_rs::TS;

use crate::models::permissions::Permission;
use crate::models::users::entities::UserStatus;
use crate::models::{ListQuery, SortOrder};
use crate::utils::validate::{FieldError, Validator};

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/staff.ts")]
pub struct CreateStaffRequest {
    pub email: String,
    pub display_name: String,
    #[serde(default)]
    pub permissions: Vec<Permission>,
    /// 仅超级管理员需要指定
    pub school_id: Option<i64>,
}

impl CreateStaffRequest {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        Validator::new()
            .required("email", &self.email)
            .email("email", Some(self.email.as_str()))
            .required("display_name", &self.display_name)
            .finish()
    }
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/staff.ts")]
pub struct UpdateStaffRequest {
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub status: Option<UserStatus>,
}

impl UpdateStaffRequest {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut v = Validator::new();
        if let Some(email) = &self.email {
            v.required("email", email).email("email", Some(email.as_str()));
        }
        if let Some(name) = &self.display_name {
            v.required("display_name", name);
        }
        v.finish()
    }
}

/// 整体替换员工授权
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/staff.ts")]
pub struct UpdatePermissionsRequest {
    pub permissions: Vec<Permission>,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/staff.ts")]
pub struct StaffListParams {
    pub search: Option<String>,
    pub status: Option<String>,
    pub school_id: Option<i64>,
    pub sort: Option<String>,
    pub order: Option<SortOrder>,
}

impl From<StaffListParams> for ListQuery {
    fn from(p: StaffListParams) -> Self {
        ListQuery::new()
            .search(p.search)
            .filter("status", p.status)
            .sort_by(p.sort, p.order)
    }
}
