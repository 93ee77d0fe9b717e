// ==========================================
// 游乐园设备维护管理系统 - 检查表与维护记录
// ==========================================
// 红线: 模板为静态目录,运行时只读
// 红线: 维护记录按 (unit, frequency, date) 键幂等覆写,不做部分合并
// ==========================================

use crate::domain::types::{Frequency, Lang, Role};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// ChecklistItem - 检查表条目（模板）
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub item_id: i64,     // 条目标识（模板内唯一）
    pub title_tr: String, // 条目标题（土耳其语）
    pub title_en: String, // 条目标题（英语）
}

impl ChecklistItem {
    pub fn new(item_id: i64, title_tr: impl Into<String>, title_en: impl Into<String>) -> Self {
        Self {
            item_id,
            title_tr: title_tr.into(),
            title_en: title_en.into(),
        }
    }

    /// 按语言取标题
    pub fn title(&self, lang: Lang) -> &str {
        match lang {
            Lang::Tr => &self.title_tr,
            Lang::En => &self.title_en,
        }
    }
}

// ==========================================
// ItemCheck - 单条勾选状态
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCheck {
    pub item_id: i64,  // 对应模板条目
    pub checked: bool, // 是否完成
}

// ==========================================
// MaintenanceRecord - 维护签核记录
// ==========================================
// 键: (unit_id, frequency, date) — 每键至多一条,覆写替换
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    // ===== 业务键 =====
    pub unit_id: i64,         // 设备标识
    pub frequency: Frequency, // 维护频率
    pub date: NaiveDate,      // 维护日期

    // ===== 内容 =====
    pub items: Vec<ItemCheck>,  // 逐条勾选状态
    pub notes: Option<String>,  // 备注（使用的备件等）

    // ===== 签核 =====
    pub signer_name: String,        // 签核人姓名
    pub signer_role: Role,          // 签核人角色
    pub signed_at: DateTime<Utc>,   // 签核时间戳
}

impl MaintenanceRecord {
    /// 是否与给定业务键匹配
    pub fn matches_key(&self, unit_id: i64, frequency: Frequency, date: NaiveDate) -> bool {
        self.unit_id == unit_id && self.frequency == frequency && self.date == date
    }

    /// 对照模板判断是否全部勾选
    ///
    /// 模板条目缺勾选记录视为未完成; 勾选记录中的多余条目忽略。
    pub fn all_checked(&self, template: &[ChecklistItem]) -> bool {
        !template.is_empty()
            && template.iter().all(|item| {
                self.items
                    .iter()
                    .any(|c| c.item_id == item.item_id && c.checked)
            })
    }
}
