//! 权限门控：决定一个操作控件是否可用
//!
//! 纯函数，不访问存储；权限集合由调用方显式传入。

use serde::Serialize;

use super::entities::{PermissionAction, PermissionCategory, PermissionSet};

/// 未授权时的呈现方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateFallback {
    #[default]
    Disable,
    Hide,
}

/// 门控结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GateDecision {
    Enabled,
    Disabled,
    Hidden,
}

impl GateDecision {
    pub fn is_enabled(&self) -> bool {
        matches!(self, GateDecision::Enabled)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionGate {
    pub category: PermissionCategory,
    pub action: PermissionAction,
    pub fallback: GateFallback,
}

impl PermissionGate {
    pub fn new(category: PermissionCategory, action: PermissionAction) -> Self {
        Self {
            category,
            action,
            fallback: GateFallback::Disable,
        }
    }

    /// 未授权时直接隐藏控件
    pub fn hidden_when_denied(mut self) -> Self {
        self.fallback = GateFallback::Hide;
        self
    }

    pub fn evaluate(&self, permissions: &PermissionSet) -> GateDecision {
        if permissions.allows(self.category, self.action) {
            GateDecision::Enabled
        } else {
            match self.fallback {
                GateFallback::Disable => GateDecision::Disabled,
                GateFallback::Hide => GateDecision::Hidden,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::permissions::Permission;

    #[test]
    fn test_gate_decisions() {
        let set: PermissionSet = [Permission::new(
            PermissionCategory::Students,
            PermissionAction::View,
        )]
        .into_iter()
        .collect();

        let view = PermissionGate::new(PermissionCategory::Students, PermissionAction::View);
        assert_eq!(view.evaluate(&set), GateDecision::Enabled);

        let create = PermissionGate::new(PermissionCategory::Students, PermissionAction::Create);
        assert_eq!(create.evaluate(&set), GateDecision::Disabled);
        assert_eq!(
            create.hidden_when_denied().evaluate(&set),
            GateDecision::Hidden
        );
    }
}
