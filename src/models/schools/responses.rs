use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::School;
use crate::models::users::entities::Credentials;

/// 创建学校的响应；若同时创建了管理员，附带一次性登录凭据
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/school.ts")]
pub struct SchoolCreatedResponse {
    pub school: School,
    pub admin_credentials: Option<Credentials>,
}
