// ==========================================
// 游乐园设备维护管理系统 - 仓储层
// ==========================================
// 职责: 整体快照的持久化存取,不含业务逻辑
// ==========================================

pub mod error;
pub mod legacy;
pub mod store_repo;

// 重导出核心类型
pub use error::{RepositoryError, RepositoryResult};
pub use store_repo::{SqliteStoreRepository, StoreRepository};
