// ==========================================
// 游乐园设备维护管理系统 - 权限谓词
// ==========================================
// 职责: 纯函数能力检查,门禁所有变更操作
// 红线: 谓词只看角色,不看任何全局状态
// ==========================================

use crate::domain::store::Store;
use crate::domain::types::{Role, UnitTag};
use crate::domain::unit::Unit;

/// 可编辑设备元数据（仅两类管理角色）
pub fn can_edit_unit_metadata(role: Role) -> bool {
    matches!(role, Role::Ops | Role::TechManager)
}

/// 可执行技术维护签核
pub fn can_perform_technical_work(role: Role) -> bool {
    matches!(role, Role::Tech | Role::TechManager | Role::Ops)
}

/// 可签当日开放（仅现场两角色）
pub fn can_perform_opening_signature(role: Role) -> bool {
    matches!(role, Role::Supervisor | Role::Operator)
}

/// 可查看全部设备（管理角色）
pub fn can_see_all_units(role: Role) -> bool {
    matches!(role, Role::Ops | Role::TechManager)
}

/// 可报告事故（现场与技术角色）
pub fn can_report_incident(role: Role) -> bool {
    matches!(role, Role::Operator | Role::Supervisor | Role::Tech)
}

/// 角色可见的设备列表
///
/// 策略:
/// - OPS / TECH_MANAGER / TECH: 全部设备
/// - SUPERVISOR / OPERATOR: 仅非红牌设备（蓝牌保留可见,便于关注待复批设备）
pub fn visible_units<'a>(store: &'a Store, role: Role) -> Vec<&'a Unit> {
    if can_see_all_units(role) || role == Role::Tech {
        store.units.iter().collect()
    } else {
        store
            .units
            .iter()
            .filter(|u| u.tag != UnitTag::Red)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_permission() {
        assert!(can_edit_unit_metadata(Role::Ops));
        assert!(can_edit_unit_metadata(Role::TechManager));
        assert!(!can_edit_unit_metadata(Role::Supervisor));
        assert!(!can_edit_unit_metadata(Role::Tech));
        assert!(!can_edit_unit_metadata(Role::Operator));
    }

    #[test]
    fn test_technical_permission() {
        assert!(can_perform_technical_work(Role::Tech));
        assert!(can_perform_technical_work(Role::TechManager));
        assert!(can_perform_technical_work(Role::Ops));
        assert!(!can_perform_technical_work(Role::Supervisor));
        assert!(!can_perform_technical_work(Role::Operator));
    }

    #[test]
    fn test_opening_permission() {
        assert!(can_perform_opening_signature(Role::Supervisor));
        assert!(can_perform_opening_signature(Role::Operator));
        assert!(!can_perform_opening_signature(Role::Ops));
        assert!(!can_perform_opening_signature(Role::TechManager));
        assert!(!can_perform_opening_signature(Role::Tech));
    }

    #[test]
    fn test_incident_permission() {
        assert!(can_report_incident(Role::Operator));
        assert!(can_report_incident(Role::Supervisor));
        assert!(can_report_incident(Role::Tech));
        assert!(!can_report_incident(Role::Ops));
        assert!(!can_report_incident(Role::TechManager));
    }

    #[test]
    fn test_visible_units_filter() {
        let store = Store::seed(); // 种子含 1 台红牌设备 (Gondol)

        for role in [Role::Ops, Role::TechManager, Role::Tech] {
            assert_eq!(visible_units(&store, role).len(), 3);
        }
        for role in [Role::Supervisor, Role::Operator] {
            let visible = visible_units(&store, role);
            assert_eq!(visible.len(), 2);
            assert!(visible.iter().all(|u| u.tag != UnitTag::Red));
        }
    }
}
