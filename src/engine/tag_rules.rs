// ==========================================
// 游乐园设备维护管理系统 - 标签派生核心
// ==========================================
// 职责: 维护签核后的设备标签派生,纯函数可单测
// 红线: 派生是显式独立步骤,在记录覆写之后调用,不得内联到界面事件
// 红线: 所有规则必须输出 reason
// ==========================================

use crate::domain::types::{Frequency, UnitTag};

// ==========================================
// TagRules - 标签派生规则（纯函数集合）
// ==========================================
pub struct TagRules;

impl TagRules {
    /// 维护签核后的标签派生
    ///
    /// # 参数
    /// - current_tag: 设备当前标签
    /// - frequency: 本次签核的维护频率
    /// - all_checked: 模板条目是否全部勾选
    /// - has_open_incident: 设备是否存在未关闭事故
    /// - tag_driving_frequencies: 驱动标签的频率集合（通常为日检/周检）
    ///
    /// # 返回
    /// - (Option<UnitTag>, Vec<String>): 新标签（None = 不变更）与决策原因
    ///
    /// # 规则
    /// 1. 月检/年检（不在驱动集合内）不改标签
    /// 2. 存在未关闭事故时永不晋升（红牌由事故生命周期独占）
    /// 3. 全部勾选 → GREEN; 部分勾选 → BLUE
    pub fn derive_after_maintenance(
        current_tag: UnitTag,
        frequency: Frequency,
        all_checked: bool,
        has_open_incident: bool,
        tag_driving_frequencies: &[Frequency],
    ) -> (Option<UnitTag>, Vec<String>) {
        let mut reasons = Vec::new();

        if !tag_driving_frequencies.contains(&frequency) {
            reasons.push(format!("{}: 非例行频率,不驱动标签", frequency));
            return (None, reasons);
        }

        if has_open_incident {
            reasons.push("存在未关闭事故,维护完成不触发晋升".to_string());
            return (None, reasons);
        }

        let derived = if all_checked {
            reasons.push(format!("{}: 模板条目全部完成 → GREEN", frequency));
            UnitTag::Green
        } else {
            reasons.push(format!("{}: 模板条目部分完成 → BLUE", frequency));
            UnitTag::Blue
        };

        if derived == current_tag {
            reasons.push(format!("标签已为 {},无变更", current_tag));
            (None, reasons)
        } else {
            (Some(derived), reasons)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DRIVING: [Frequency; 2] = [Frequency::Daily, Frequency::Weekly];

    #[test]
    fn test_all_checked_promotes_to_green() {
        let (tag, reasons) = TagRules::derive_after_maintenance(
            UnitTag::Blue,
            Frequency::Daily,
            true,
            false,
            &DRIVING,
        );
        assert_eq!(tag, Some(UnitTag::Green));
        assert!(!reasons.is_empty());
    }

    #[test]
    fn test_partial_sets_blue() {
        let (tag, _) = TagRules::derive_after_maintenance(
            UnitTag::Green,
            Frequency::Weekly,
            false,
            false,
            &DRIVING,
        );
        assert_eq!(tag, Some(UnitTag::Blue));
    }

    #[test]
    fn test_monthly_never_alters_tag() {
        for all_checked in [true, false] {
            let (tag, reasons) = TagRules::derive_after_maintenance(
                UnitTag::Blue,
                Frequency::Monthly,
                all_checked,
                false,
                &DRIVING,
            );
            assert_eq!(tag, None);
            assert!(reasons.iter().any(|r| r.contains("不驱动标签")));
        }
    }

    #[test]
    fn test_open_incident_blocks_promotion() {
        // 有未关闭事故时,即使全勾也不晋升（红牌归事故生命周期管）
        let (tag, reasons) = TagRules::derive_after_maintenance(
            UnitTag::Red,
            Frequency::Daily,
            true,
            true,
            &DRIVING,
        );
        assert_eq!(tag, None);
        assert!(reasons.iter().any(|r| r.contains("未关闭事故")));
    }

    #[test]
    fn test_no_change_when_already_at_target() {
        let (tag, _) = TagRules::derive_after_maintenance(
            UnitTag::Green,
            Frequency::Daily,
            true,
            false,
            &DRIVING,
        );
        assert_eq!(tag, None);
    }

    #[test]
    fn test_red_without_incident_can_recover() {
        // 人工红牌（无事故）允许经全勾维护恢复绿牌
        let (tag, _) = TagRules::derive_after_maintenance(
            UnitTag::Red,
            Frequency::Daily,
            true,
            false,
            &DRIVING,
        );
        assert_eq!(tag, Some(UnitTag::Green));
    }
}
