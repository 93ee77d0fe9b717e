// ==========================================
// 游乐园设备维护管理系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、聚合根
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod actor;
pub mod checklist;
pub mod incident;
pub mod note;
pub mod opening;
pub mod store;
pub mod types;
pub mod unit;

// 重导出核心类型
pub use actor::Actor;
pub use checklist::{ChecklistItem, ItemCheck, MaintenanceRecord};
pub use incident::Incident;
pub use note::{NoteReply, TechNote};
pub use opening::OpeningSignature;
pub use store::{Store, STORE_KEY};
pub use types::{Frequency, IncidentStatus, Lang, NoteAuthor, OpeningRole, Role, UnitTag};
pub use unit::{Unit, UnitPatch};
