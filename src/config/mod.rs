// ==========================================
// 游乐园设备维护管理系统 - 工作流配置
// ==========================================
// 职责: 集中可调的工作流策略参数
// 说明: 引擎只读配置,不在运行中修改
// ==========================================

use crate::domain::types::Frequency;
use serde::{Deserialize, Serialize};

// ==========================================
// WorkflowConfig - 工作流配置
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowConfig {
    /// 驱动标签派生的维护频率（默认: 日检 + 周检）
    ///
    /// 仅这些频率的签核会触发标签派生; 月检/年检永不改标签。
    pub tag_driving_frequencies: Vec<Frequency>,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            tag_driving_frequencies: vec![Frequency::Daily, Frequency::Weekly],
        }
    }
}

impl WorkflowConfig {
    /// 指定频率是否驱动标签
    pub fn drives_tag(&self, frequency: Frequency) -> bool {
        self.tag_driving_frequencies.contains(&frequency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_driving_frequencies() {
        let config = WorkflowConfig::default();
        assert!(config.drives_tag(Frequency::Daily));
        assert!(config.drives_tag(Frequency::Weekly));
        assert!(!config.drives_tag(Frequency::Monthly));
        assert!(!config.drives_tag(Frequency::Yearly));
    }
}
