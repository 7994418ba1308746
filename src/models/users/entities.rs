use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 用户角色
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub enum UserRole {
    SuperAdmin,  // 平台超级管理员（跨租户）
    SchoolAdmin, // 学校管理员
    Teacher,     // 教师
    Staff,       // 员工（按显式授权）
}

impl UserRole {
    pub const SUPER_ADMIN: &'static str = "super_admin";
    pub const SCHOOL_ADMIN: &'static str = "school_admin";
    pub const TEACHER: &'static str = "teacher";
    pub const STAFF: &'static str = "staff";

    pub fn super_admin_roles() -> &'static [&'static UserRole] {
        &[&Self::SuperAdmin]
    }
    pub fn admin_roles() -> &'static [&'static UserRole] {
        &[&Self::SuperAdmin, &Self::SchoolAdmin]
    }
    pub fn all_roles() -> &'static [&'static UserRole] {
        &[
            &Self::SuperAdmin,
            &Self::SchoolAdmin,
            &Self::Teacher,
            &Self::Staff,
        ]
    }

    /// 是否可以跨租户访问
    pub fn is_cross_tenant(&self) -> bool {
        matches!(self, UserRole::SuperAdmin)
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<UserRole>().map_err(|_| {
            serde::de::Error::custom(format!(
                "Invalid user role: '{s}'. Supported roles: super_admin, school_admin, teacher, staff"
            ))
        })
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::SuperAdmin => write!(f, "{}", UserRole::SUPER_ADMIN),
            UserRole::SchoolAdmin => write!(f, "{}", UserRole::SCHOOL_ADMIN),
            UserRole::Teacher => write!(f, "{}", UserRole::TEACHER),
            UserRole::Staff => write!(f, "{}", UserRole::STAFF),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            UserRole::SUPER_ADMIN => Ok(UserRole::SuperAdmin),
            UserRole::SCHOOL_ADMIN => Ok(UserRole::SchoolAdmin),
            UserRole::TEACHER => Ok(UserRole::Teacher),
            UserRole::STAFF => Ok(UserRole::Staff),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

// 用户状态
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub enum UserStatus {
    Active,    // 活跃
    Inactive,  // 非活跃
    Suspended, // 暂停
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserStatus::Active => write!(f, "active"),
            UserStatus::Inactive => write!(f, "inactive"),
            UserStatus::Suspended => write!(f, "suspended"),
        }
    }
}

impl std::str::FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(UserStatus::Active),
            "inactive" => Ok(UserStatus::Inactive),
            "suspended" => Ok(UserStatus::Suspended),
            _ => Err(format!("Invalid user status: {s}")),
        }
    }
}

// 用户实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct User {
    pub id: i64,
    /// 所属学校，超级管理员为 None
    pub school_id: Option<i64>,
    pub email: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    #[ts(skip)]
    pub password_hash: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub display_name: Option<String>,
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl User {
    // 生成访问令牌
    pub fn generate_access_token(&self) -> Result<String, String> {
        crate::utils::jwt::JwtUtils::generate_access_token(
            self.id,
            &self.role.to_string(),
            self.school_id,
        )
        .map_err(|e| format!("Failed to generate access token: {e}"))
    }

    /// 是否可以看到指定租户的资源
    pub fn can_access_school(&self, school_id: i64) -> bool {
        self.role.is_cross_tenant() || self.school_id == Some(school_id)
    }
}

/// 新建账号时生成的一次性登录凭据（只在创建响应中返回一次）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// 存储层创建用户的参数（密码已哈希）
#[derive(Debug, Clone)]
pub struct NewUser {
    pub school_id: Option<i64>,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub display_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip_names() {
        for role in UserRole::all_roles() {
            let parsed: UserRole = role.to_string().parse().unwrap();
            assert_eq!(&parsed, *role);
        }
        assert!(serde_json::from_str::<UserRole>("\"admin\"").is_err());
    }

    #[test]
    fn test_can_access_school() {
        let now = chrono::Utc::now();
        let mut user = User {
            id: 7,
            school_id: Some(1),
            email: "a@b.sn".into(),
            password_hash: String::new(),
            role: UserRole::SchoolAdmin,
            status: UserStatus::Active,
            display_name: None,
            last_login: None,
            created_at: now,
            updated_at: now,
        };
        assert!(user.can_access_school(1));
        assert!(!user.can_access_school(2));

        user.role = UserRole::SuperAdmin;
        user.school_id = None;
        assert!(user.can_access_school(2));
    }
}
