use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::users::entities::UserRole;

/// 权限类别（对应管理模块）
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/permission.ts")]
pub enum PermissionCategory {
    Schools,
    Staff,
    Teachers,
    Students,
    Rooms,
    Schedules,
    Payments,
    Evaluations,
}

impl PermissionCategory {
    pub const ALL: [PermissionCategory; 8] = [
        Self::Schools,
        Self::Staff,
        Self::Teachers,
        Self::Students,
        Self::Rooms,
        Self::Schedules,
        Self::Payments,
        Self::Evaluations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Schools => "schools",
            Self::Staff => "staff",
            Self::Teachers => "teachers",
            Self::Students => "students",
            Self::Rooms => "rooms",
            Self::Schedules => "schedules",
            Self::Payments => "payments",
            Self::Evaluations => "evaluations",
        }
    }
}

impl std::fmt::Display for PermissionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PermissionCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Invalid permission category: {s}"))
    }
}

/// 权限动作
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/permission.ts")]
pub enum PermissionAction {
    View,
    Create,
    Edit,
    Delete,
}

impl PermissionAction {
    pub const ALL: [PermissionAction; 4] = [Self::View, Self::Create, Self::Edit, Self::Delete];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Create => "create",
            Self::Edit => "edit",
            Self::Delete => "delete",
        }
    }
}

impl std::fmt::Display for PermissionAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PermissionAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| format!("Invalid permission action: {s}"))
    }
}

/// (类别, 动作) 权限对
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "../frontend/src/types/generated/permission.ts")]
pub struct Permission {
    pub category: PermissionCategory,
    pub action: PermissionAction,
}

impl Permission {
    pub fn new(category: PermissionCategory, action: PermissionAction) -> Self {
        Self { category, action }
    }
}

/// 当前用户的权限集合
///
/// 由角色默认权限与员工显式授权组合而成，`allows` 为纯谓词。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSet {
    grants: BTreeSet<Permission>,
}

impl PermissionSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        let mut set = Self::empty();
        for category in PermissionCategory::ALL {
            for action in PermissionAction::ALL {
                set.grant(Permission::new(category, action));
            }
        }
        set
    }

    /// 根据角色构建权限集合，`grants` 仅对员工角色生效
    pub fn for_role(role: &UserRole, grants: &[Permission]) -> Self {
        use PermissionAction::*;
        use PermissionCategory::*;

        match role {
            UserRole::SuperAdmin => Self::all(),
            UserRole::SchoolAdmin => {
                let mut set = Self::all();
                set.revoke(Permission::new(Schools, Create));
                set.revoke(Permission::new(Schools, Edit));
                set.revoke(Permission::new(Schools, Delete));
                set
            }
            UserRole::Teacher => {
                let mut set = Self::empty();
                for category in [Teachers, Students, Rooms, Schedules] {
                    set.grant(Permission::new(category, View));
                }
                for action in [View, Create, Edit] {
                    set.grant(Permission::new(Evaluations, action));
                }
                set
            }
            UserRole::Staff => grants.iter().copied().collect(),
        }
    }

    pub fn grant(&mut self, permission: Permission) {
        self.grants.insert(permission);
    }

    pub fn revoke(&mut self, permission: Permission) {
        self.grants.remove(&permission);
    }

    pub fn allows(&self, category: PermissionCategory, action: PermissionAction) -> bool {
        self.grants.contains(&Permission::new(category, action))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Permission> {
        self.grants.iter()
    }

    pub fn len(&self) -> usize {
        self.grants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }

    /// 转换为 类别 -> 动作列表 的矩阵，供前端控制按钮状态
    pub fn to_matrix(&self) -> BTreeMap<String, Vec<String>> {
        let mut matrix: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for permission in &self.grants {
            matrix
                .entry(permission.category.to_string())
                .or_default()
                .push(permission.action.to_string());
        }
        matrix
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        Self {
            grants: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_super_admin_has_everything() {
        let set = PermissionSet::for_role(&UserRole::SuperAdmin, &[]);
        assert_eq!(set.len(), 32);
        assert!(set.allows(PermissionCategory::Schools, PermissionAction::Delete));
    }

    #[test]
    fn test_school_admin_cannot_manage_schools() {
        let set = PermissionSet::for_role(&UserRole::SchoolAdmin, &[]);
        assert!(set.allows(PermissionCategory::Schools, PermissionAction::View));
        assert!(!set.allows(PermissionCategory::Schools, PermissionAction::Create));
        assert!(set.allows(PermissionCategory::Staff, PermissionAction::Delete));
    }

    #[test]
    fn test_teacher_defaults() {
        let set = PermissionSet::for_role(&UserRole::Teacher, &[]);
        assert!(set.allows(PermissionCategory::Students, PermissionAction::View));
        assert!(!set.allows(PermissionCategory::Students, PermissionAction::Create));
        assert!(set.allows(PermissionCategory::Evaluations, PermissionAction::Edit));
        assert!(!set.allows(PermissionCategory::Evaluations, PermissionAction::Delete));
    }

    #[test]
    fn test_staff_uses_explicit_grants_only() {
        let grants = [Permission::new(
            PermissionCategory::Students,
            PermissionAction::View,
        )];
        let set = PermissionSet::for_role(&UserRole::Staff, &grants);
        assert!(set.allows(PermissionCategory::Students, PermissionAction::View));
        assert!(!set.allows(PermissionCategory::Students, PermissionAction::Create));

        let none = PermissionSet::for_role(&UserRole::Staff, &[]);
        assert!(none.is_empty());
    }

    #[test]
    fn test_parse_round_names() {
        assert_eq!(
            "schedules".parse::<PermissionCategory>(),
            Ok(PermissionCategory::Schedules)
        );
        assert_eq!("edit".parse::<PermissionAction>(), Ok(PermissionAction::Edit));
        assert!("publish".parse::<PermissionAction>().is_err());
    }

    #[test]
    fn test_matrix_groups_by_category() {
        let set: PermissionSet = [
            Permission::new(PermissionCategory::Rooms, PermissionAction::View),
            Permission::new(PermissionCategory::Rooms, PermissionAction::Edit),
        ]
        .into_iter()
        .collect();
        let matrix = set.to_matrix();
        assert_eq!(matrix.len(), 1);
        assert_eq!(matrix["rooms"], vec!["view", "edit"]);
    }
}
