use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::StaffMember;
use crate::models::users::entities::Credentials;

/// 新建员工响应，凭据只返回这一次
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/staff.ts")]
pub struct StaffCreatedResponse {
    pub staff: StaffMember,
    pub credentials: Credentials,
}
