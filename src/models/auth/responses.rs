use std::collections::BTreeMap;

use crate::models::users::entities::User;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 登录响应
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginResponse {
    pub access_token: String,
    /// 有效期（秒）
    pub expires_in: i64,
    pub user: User,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct UserInfoResponse {
    pub user: User,
}

/// 当前用户的权限矩阵：类别 -> 动作列表
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct PermissionsResponse {
    pub role: String,
    pub school_id: Option<i64>,
    pub permissions: BTreeMap<String, Vec<String>>,
}
