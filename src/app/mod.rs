// ==========================================
// 游乐园设备维护管理系统 - 应用层
// ==========================================
// 职责: 应用状态装配与默认路径解析
// ==========================================

pub mod state;

pub use state::{get_default_db_path, AppState};
