// ==========================================
// 游乐园设备维护管理系统 - API层
// ==========================================
// 职责: 对外业务接口,编排仓储与引擎,翻译错误
// ==========================================

pub mod error;
pub mod export_api;
pub mod workflow_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use export_api::ExportApi;
pub use workflow_api::{MaintenanceReceipt, UnitDetail, WorkflowApi};
