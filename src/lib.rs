// ==========================================
// 游乐园设备维护管理系统 - 核心库
// ==========================================
// 技术栈: Rust + SQLite
// 系统定位: 安全工作流核心 (角色门禁状态机)
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "tr");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 工作流业务规则
pub mod engine;

// 数据仓储层 - 整体快照存取
pub mod repository;

// API 层 - 业务接口
pub mod api;

// 应用层 - 状态装配
pub mod app;

// 配置层 - 工作流配置
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    Frequency, IncidentStatus, Lang, NoteAuthor, OpeningRole, Role, UnitTag,
};

// 领域实体
pub use domain::{
    Actor, ChecklistItem, Incident, ItemCheck, MaintenanceRecord, NoteReply, OpeningSignature,
    Store, TechNote, Unit,
};

// 引擎
pub use engine::{
    IncidentEngine, MaintenanceEngine, NoteEngine, OpeningEngine, TagRules, UnitAdminEngine,
    WorkflowError, WorkflowResult,
};

// 仓储
pub use repository::{SqliteStoreRepository, StoreRepository};

// API
pub use api::{ApiError, ApiResult, ExportApi, WorkflowApi};

// 配置
pub use config::WorkflowConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "游乐园设备维护管理系统";

// 存储文档版本（与持久化 JSON 的 STORE_KEY 对齐）
pub const STORE_VERSION: &str = "v2";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
