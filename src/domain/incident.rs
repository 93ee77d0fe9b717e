// ==========================================
// 游乐园设备维护管理系统 - 事故记录
// ==========================================
// 红线: 每设备至多一条未关闭事故
// 红线: 关闭事故必须给出原因与整改措施
// ==========================================

use crate::domain::types::{IncidentStatus, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// Incident - 事故记录
// ==========================================
// 生命周期: Open → Closed; 重开产生新记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Incident {
    // ===== 主键与关联 =====
    pub incident_id: String, // 事故标识（UUID）
    pub unit_id: i64,        // 关联设备

    // ===== 状态 =====
    pub status: IncidentStatus, // OPEN / CLOSED

    // ===== 开启信息 =====
    pub opened_by_role: Role,     // 报告人角色
    pub opened_by_name: String,   // 报告人姓名
    pub opened_at: DateTime<Utc>, // 报告时间

    // ===== 关闭信息（关闭时必填）=====
    pub cause: Option<String>,          // 事故原因
    pub fix: Option<String>,            // 整改措施
    pub closed_by_name: Option<String>, // 关闭人姓名
    pub closed_at: Option<DateTime<Utc>>, // 关闭时间
}

impl Incident {
    /// 创建新的未关闭事故
    pub fn open(unit_id: i64, opened_by_role: Role, opened_by_name: impl Into<String>) -> Self {
        Self {
            incident_id: uuid::Uuid::new_v4().to_string(),
            unit_id,
            status: IncidentStatus::Open,
            opened_by_role,
            opened_by_name: opened_by_name.into(),
            opened_at: Utc::now(),
            cause: None,
            fix: None,
            closed_by_name: None,
            closed_at: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == IncidentStatus::Open
    }
}
