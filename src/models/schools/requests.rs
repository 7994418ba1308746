use serde::Deserialize;
use ts_rs::TS;

use super::entities::SchoolStatus;
use crate::models::{ListQuery, SortOrder};
use crate::utils::validate::{FieldError, Validator};

/// 创建学校时可选地一并创建学校管理员
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/school.ts")]
pub struct SchoolAdminRequest {
    pub email: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/school.ts")]
pub struct CreateSchoolRequest {
    pub name: String,
    pub code: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub admin: Option<SchoolAdminRequest>,
}

impl CreateSchoolRequest {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut v = Validator::new();
        v.required("name", &self.name)
            .required("code", &self.code)
            .email("email", self.email.as_deref())
            .phone("phone", self.phone.as_deref());
        if let Some(admin) = &self.admin {
            v.required("admin.email", &admin.email)
                .email("admin.email", Some(admin.email.as_str()));
        }
        v.finish()
    }
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/school.ts")]
pub struct UpdateSchoolRequest {
    pub name: Option<String>,
    pub code: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub status: Option<SchoolStatus>,
}

impl UpdateSchoolRequest {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut v = Validator::new();
        if let Some(name) = &self.name {
            v.required("name", name);
        }
        if let Some(code) = &self.code {
            v.required("code", code);
        }
        v.email("email", self.email.as_deref())
            .phone("phone", self.phone.as_deref())
            .finish()
    }
}

/// 学校列表查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/school.ts")]
pub struct SchoolListParams {
    pub search: Option<String>,
    pub status: Option<String>,
    pub sort: Option<String>,
    pub order: Option<SortOrder>,
}

impl From<SchoolListParams> for ListQuery {
    fn from(p: SchoolListParams) -> Self {
        ListQuery::new()
            .search(p.search)
            .filter("status", p.status)
            .sort_by(p.sort, p.order)
    }
}
