use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Teacher;
use crate::models::users::entities::Credentials;

/// 新建教师响应：教师档案与其登录账号的一次性凭据
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherCreatedResponse {
    pub teacher: Teacher,
    pub credentials: Credentials,
}
