// ==========================================
// 游乐园设备维护管理系统 - 操作者值对象
// ==========================================
// 红线: 操作者显式传入每个引擎操作,不读全局状态
// 说明: 无真实账号体系,姓名为自由文本
// ==========================================

use crate::domain::types::Role;
use serde::{Deserialize, Serialize};

// ==========================================
// Actor - 操作者
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub name: String, // 显示姓名（自由文本,签字用）
    pub role: Role,   // 当前角色
}

impl Actor {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }

    /// 姓名是否为空白（签字校验用）
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// 去除首尾空白后的签字名
    pub fn signer_name(&self) -> String {
        self.name.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_name_validation() {
        assert!(Actor::new("Ahmet", Role::Tech).has_name());
        assert!(!Actor::new("   ", Role::Tech).has_name());
        assert_eq!(Actor::new("  Jane ", Role::Supervisor).signer_name(), "Jane");
    }
}
