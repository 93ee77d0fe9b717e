// ==========================================
// 游乐园设备维护管理系统 - 工作流错误类型
// ==========================================
// 分类: NotAuthorized / ValidationFailed / PreconditionFailed
// 红线: 全部为用户可恢复错误,拒绝时 Store 保持原样,不 panic
// 工具: thiserror 派生宏
// ==========================================

use crate::domain::types::{OpeningRole, Role, UnitTag};
use chrono::NaiveDate;
use thiserror::Error;

// ==========================================
// WorkflowErrorKind - 错误三分类
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowErrorKind {
    NotAuthorized,      // 角色缺少能力
    ValidationFailed,   // 必填字段缺失
    PreconditionFailed, // 状态不满足迁移前提
}

// ==========================================
// WorkflowError - 工作流拒绝信号
// ==========================================
#[derive(Error, Debug)]
pub enum WorkflowError {
    // ===== 权限错误 =====
    #[error("角色无权执行该操作: role={role}, operation={operation}")]
    NotAuthorized { role: Role, operation: &'static str },

    // ===== 校验错误 =====
    #[error("签字人姓名缺失")]
    SignerRequired,

    #[error("事故原因与整改措施均为必填")]
    CauseAndFixRequired,

    #[error("字段内容为空: {field}")]
    EmptyText { field: &'static str },

    // ===== 前提条件错误 =====
    #[error("设备不存在: unit_id={unit_id}")]
    UnitNotFound { unit_id: i64 },

    #[error("开放签字需要技术批准(绿牌): unit_id={unit_id}, tag={tag}")]
    TechnicalApprovalRequired { unit_id: i64, tag: UnitTag },

    #[error("当日该角色已签字: unit_id={unit_id}, date={date}, role={role}")]
    AlreadySigned {
        unit_id: i64,
        date: NaiveDate,
        role: OpeningRole,
    },

    #[error("设备已有未关闭事故: unit_id={unit_id}")]
    IncidentAlreadyOpen { unit_id: i64 },

    #[error("设备无未关闭事故: unit_id={unit_id}")]
    NoOpenIncident { unit_id: i64 },

    #[error("便签不存在: note_id={note_id}")]
    NoteNotFound { note_id: String },

    #[error("便签已有回复: note_id={note_id}")]
    NoteAlreadyAnswered { note_id: String },

    #[error("存在未关闭事故,禁止人工解除红牌: unit_id={unit_id}")]
    TagOverrideBlocked { unit_id: i64 },
}

impl WorkflowError {
    /// 错误三分类（测试与上层映射用）
    pub fn kind(&self) -> WorkflowErrorKind {
        match self {
            WorkflowError::NotAuthorized { .. } => WorkflowErrorKind::NotAuthorized,
            WorkflowError::SignerRequired
            | WorkflowError::CauseAndFixRequired
            | WorkflowError::EmptyText { .. } => WorkflowErrorKind::ValidationFailed,
            WorkflowError::UnitNotFound { .. }
            | WorkflowError::TechnicalApprovalRequired { .. }
            | WorkflowError::AlreadySigned { .. }
            | WorkflowError::IncidentAlreadyOpen { .. }
            | WorkflowError::NoOpenIncident { .. }
            | WorkflowError::NoteNotFound { .. }
            | WorkflowError::NoteAlreadyAnswered { .. }
            | WorkflowError::TagOverrideBlocked { .. } => WorkflowErrorKind::PreconditionFailed,
        }
    }

    /// 用户提示的 i18n 键（locales/*.yml）
    pub fn message_key(&self) -> &'static str {
        match self {
            WorkflowError::NotAuthorized { .. } => "workflow.not_authorized",
            WorkflowError::SignerRequired => "workflow.signer_required",
            WorkflowError::CauseAndFixRequired => "workflow.cause_and_fix_required",
            WorkflowError::EmptyText { .. } => "workflow.empty_text",
            WorkflowError::UnitNotFound { .. } => "workflow.unit_not_found",
            WorkflowError::TechnicalApprovalRequired { .. } => {
                "workflow.technical_approval_required"
            }
            WorkflowError::AlreadySigned { .. } => "workflow.already_signed",
            WorkflowError::IncidentAlreadyOpen { .. } => "workflow.incident_already_open",
            WorkflowError::NoOpenIncident { .. } => "workflow.no_open_incident",
            WorkflowError::NoteNotFound { .. } => "workflow.note_not_found",
            WorkflowError::NoteAlreadyAnswered { .. } => "workflow.note_already_answered",
            WorkflowError::TagOverrideBlocked { .. } => "workflow.tag_override_blocked",
        }
    }
}

/// Result 类型别名
pub type WorkflowResult<T> = Result<T, WorkflowError>;
