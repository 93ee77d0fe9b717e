// ==========================================
// 游乐园设备维护管理系统 - 引擎层
// ==========================================
// 职责: 实现工作流业务规则,不碰持久化
// 红线: 引擎输入 (Store, Actor, 参数) 输出新 Store,拒绝时原样不动
// 红线: 所有规则必须输出 reason
// ==========================================

pub mod error;
pub mod incident;
pub mod maintenance;
pub mod notes;
pub mod opening;
pub mod permissions;
pub mod tag_rules;
pub mod unit_admin;

// 重导出核心引擎
pub use error::{WorkflowError, WorkflowErrorKind, WorkflowResult};
pub use incident::{IncidentCloseInput, IncidentEngine};
pub use maintenance::{MaintenanceEngine, MaintenanceInput, MaintenanceOutcome};
pub use notes::NoteEngine;
pub use opening::{OpeningEngine, OpeningInput};
pub use tag_rules::TagRules;
pub use unit_admin::UnitAdminEngine;
