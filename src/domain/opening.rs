// ==========================================
// 游乐园设备维护管理系统 - 开放签字
// ==========================================
// 红线: 仅绿牌设备可签开放; 每 (unit, date, role) 至多一条
// ==========================================

use crate::domain::types::OpeningRole;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// OpeningSignature - 当日开放签字
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpeningSignature {
    pub unit_id: i64,             // 设备标识
    pub date: NaiveDate,          // 开放日期
    pub role: OpeningRole,        // 签字角色（主管/操作员）
    pub name: String,             // 签字人姓名（自由文本）
    pub signed_at: DateTime<Utc>, // 签字时间戳
}

impl OpeningSignature {
    /// 是否与给定业务键匹配
    pub fn matches_key(&self, unit_id: i64, date: NaiveDate, role: OpeningRole) -> bool {
        self.unit_id == unit_id && self.date == date && self.role == role
    }
}
