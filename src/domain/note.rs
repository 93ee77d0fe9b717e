// ==========================================
// 游乐园设备维护管理系统 - 技术便签（问/答）
// ==========================================
// 用途: 管理角色向技术团队提问,技术经理回复
// ==========================================

use crate::domain::types::NoteAuthor;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// NoteReply - 便签回复（仅技术经理）
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteReply {
    pub date: NaiveDate, // 回复日期
    pub text: String,    // 回复内容
}

// ==========================================
// TechNote - 技术便签
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechNote {
    pub note_id: String,          // 便签标识（UUID）
    pub unit_id: i64,             // 关联设备
    pub date: NaiveDate,          // 发起日期
    pub author: NoteAuthor,       // 发起角色（OPS / TECH_MANAGER）
    pub text: String,             // 问题/便签内容
    pub reply: Option<NoteReply>, // 技术经理回复（可空）
}

impl TechNote {
    pub fn new(unit_id: i64, date: NaiveDate, author: NoteAuthor, text: impl Into<String>) -> Self {
        Self {
            note_id: uuid::Uuid::new_v4().to_string(),
            unit_id,
            date,
            author,
            text: text.into(),
            reply: None,
        }
    }

    pub fn is_answered(&self) -> bool {
        self.reply.is_some()
    }
}
