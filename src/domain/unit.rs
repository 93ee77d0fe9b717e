// ==========================================
// 游乐园设备维护管理系统 - 设备领域模型
// ==========================================
// 红线: 设备只增不删,标签只经工作流或管理角色变更
// ==========================================

use crate::domain::types::UnitTag;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// Unit - 游乐设备（Ride）
// ==========================================
// 生命周期: 种子数据或管理角色创建; 标签由工作流迁移; 永不删除
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    // ===== 主键 =====
    pub unit_id: i64, // 设备唯一标识

    // ===== 基础信息 =====
    pub name: String,                  // 显示名称
    pub tag: UnitTag,                  // 安全/开放标签（RED/BLUE/GREEN）
    pub manufacturer: Option<String>,  // 制造商
    pub year: Option<String>,          // 出厂年份
    pub ndt_date: Option<NaiveDate>,   // 无损检测日期（NDT）
    pub photo_ref: Option<String>,     // 照片引用（外部存储键,核心不解释内容）
}

impl Unit {
    pub fn new(unit_id: i64, name: impl Into<String>, tag: UnitTag) -> Self {
        Self {
            unit_id,
            name: name.into(),
            tag,
            manufacturer: None,
            year: None,
            ndt_date: None,
            photo_ref: None,
        }
    }
}

// ==========================================
// UnitPatch - 设备元数据补丁
// ==========================================
// 用途: 管理角色编辑接口（None = 不修改该字段）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnitPatch {
    pub name: Option<String>,
    pub manufacturer: Option<String>,
    pub year: Option<String>,
    pub ndt_date: Option<NaiveDate>,
    pub photo_ref: Option<String>,
    pub tag: Option<UnitTag>, // 人工标签覆写（受事故生命周期约束）
}

impl UnitPatch {
    /// 是否为空补丁（无任何字段修改）
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.manufacturer.is_none()
            && self.year.is_none()
            && self.ndt_date.is_none()
            && self.photo_ref.is_none()
            && self.tag.is_none()
    }
}
