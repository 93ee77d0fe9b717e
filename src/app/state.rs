// ==========================================
// 游乐园设备维护管理系统 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// ==========================================

use std::sync::Arc;

use crate::api::{ExportApi, WorkflowApi};
use crate::config::WorkflowConfig;
use crate::repository::store_repo::{SqliteStoreRepository, StoreRepository};

/// 应用状态
///
/// 包含所有API实例和共享资源
pub struct AppState {
    /// 数据库路径
    pub db_path: String,

    /// 工作流API
    pub workflow_api: Arc<WorkflowApi>,

    /// 导入导出API
    pub export_api: Arc<ExportApi>,

    /// 整体快照仓储（测试与诊断用）
    pub store_repo: Arc<dyn StoreRepository>,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    ///
    /// # 说明
    /// 该方法会：
    /// 1. 打开数据库并初始化 kv_store 表
    /// 2. 按持久化的界面语言设置全局 locale
    /// 3. 创建所有API实例
    pub fn new(db_path: String) -> Result<Self, String> {
        tracing::info!("初始化AppState，数据库路径: {}", db_path);

        let repo = SqliteStoreRepository::new(&db_path)
            .map_err(|e| format!("无法创建StoreRepository: {}", e))?;
        let repo: Arc<dyn StoreRepository> = Arc::new(repo);

        // 启动即按持久化偏好切换界面语言
        let store = repo.load_or_seed();
        crate::i18n::apply_lang(store.lang);
        tracing::info!(
            units = store.units.len(),
            lang = %store.lang,
            "存储快照就绪"
        );

        let workflow_api = Arc::new(WorkflowApi::new(repo.clone(), WorkflowConfig::default()));
        let export_api = Arc::new(ExportApi::new(repo.clone()));

        tracing::info!("AppState初始化完成");

        Ok(Self {
            db_path,
            workflow_api,
            export_api,
            store_repo: repo,
        })
    }

    /// 获取数据库路径
    pub fn get_db_path(&self) -> &str {
        &self.db_path
    }
}

// ==========================================
// 默认数据库路径辅助函数
// ==========================================

/// 获取默认数据库路径
///
/// # 返回
/// - 开发环境: 用户数据目录/lunapark-maintenance-dev/lunapark_maintenance.db
/// - 生产环境: 用户数据目录/lunapark-maintenance/lunapark_maintenance.db
pub fn get_default_db_path() -> String {
    use std::path::PathBuf;

    // 允许通过环境变量显式指定 DB 路径（便于调试/测试/CI）
    if let Ok(path) = std::env::var("LUNAPARK_MAINTENANCE_DB_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    // 先给一个默认回退值，后续如果能拿到 data_dir 再覆盖
    let mut path = PathBuf::from("./lunapark_maintenance.db");

    if let Some(data_dir) = dirs::data_dir() {
        // 开发环境使用独立目录，避免污染生产数据
        #[cfg(debug_assertions)]
        {
            path = data_dir.join("lunapark-maintenance-dev");
        }

        #[cfg(not(debug_assertions))]
        {
            path = data_dir.join("lunapark-maintenance");
        }

        // 确保目录存在
        std::fs::create_dir_all(&path).ok();
        path = path.join("lunapark_maintenance.db");
    }

    path.to_string_lossy().to_string()
}
