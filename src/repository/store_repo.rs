// ==========================================
// 游乐园设备维护管理系统 - 整体快照仓储
// ==========================================
// 契约:
// - load: 缺失/损坏时软失败回退种子数据（不抛错）
// - save: 整体覆写,无部分写语义,无跨集合事务保证
// 红线: Repository 不含业务逻辑
// ==========================================

use crate::db;
use crate::domain::store::{Store, STORE_KEY};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::legacy;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Arc, Mutex};

// ==========================================
// StoreRepository - 整体快照存取接口
// ==========================================
// 说明: 多用户化改造时在此接缝加入逐设备锁,核心契约不变
pub trait StoreRepository: Send + Sync {
    /// 读取持久化文档（Ok(None) = 尚无文档）
    fn try_load(&self) -> RepositoryResult<Option<Store>>;

    /// 整体覆写持久化文档
    fn save(&self, store: &Store) -> RepositoryResult<()>;

    /// 软失败读取: 缺失或损坏时回退种子数据
    fn load_or_seed(&self) -> Store {
        match self.try_load() {
            Ok(Some(store)) => store,
            Ok(None) => {
                tracing::info!("持久化文档不存在,使用种子数据");
                Store::seed()
            }
            Err(e) => {
                tracing::warn!("持久化文档读取失败,回退种子数据: {}", e);
                Store::seed()
            }
        }
    }
}

// ==========================================
// SqliteStoreRepository - SQLite 键值实现
// ==========================================
// 整个聚合序列化为单个 JSON 文档,存于 kv_store 表固定键下
// （浏览器 localStorage 的等价物）
pub struct SqliteStoreRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStoreRepository {
    /// 按路径打开数据库并初始化 schema
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = db::open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        db::init_store_schema(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建仓储实例
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> RepositoryResult<Self> {
        {
            let guard = conn
                .lock()
                .map_err(|e| RepositoryError::LockError(e.to_string()))?;
            db::init_store_schema(&guard)?;
        }
        Ok(Self { conn })
    }

    /// 获取数据库连接
    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }
}

impl StoreRepository for SqliteStoreRepository {
    fn try_load(&self) -> RepositoryResult<Option<Store>> {
        let conn = self.get_conn()?;

        let raw: Option<String> = conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![STORE_KEY],
                |row| row.get(0),
            )
            .optional()?;

        let Some(raw) = raw else {
            return Ok(None);
        };

        // 历史两态文档先做键名/词汇迁移,再按当前模型解析
        let mut value: serde_json::Value = serde_json::from_str(&raw)?;
        if legacy::is_legacy_document(&value) {
            tracing::info!("检测到历史两态存储文档,执行迁移");
            legacy::migrate_legacy_document(&mut value);
        }

        let store: Store = serde_json::from_value(value)?;
        Ok(Some(store))
    }

    fn save(&self, store: &Store) -> RepositoryResult<()> {
        let json = serde_json::to_string(store)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT OR REPLACE INTO kv_store (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            "#,
            params![STORE_KEY, json, Utc::now().to_rfc3339()],
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{Lang, UnitTag};

    fn in_memory_repo() -> SqliteStoreRepository {
        let conn = Connection::open_in_memory().unwrap();
        db::configure_sqlite_connection(&conn).unwrap();
        SqliteStoreRepository::from_connection(Arc::new(Mutex::new(conn))).unwrap()
    }

    #[test]
    fn test_load_missing_returns_none() {
        let repo = in_memory_repo();
        assert!(repo.try_load().unwrap().is_none());
        // 软失败路径回退种子
        let store = repo.load_or_seed();
        assert_eq!(store.units.len(), 3);
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let repo = in_memory_repo();
        let mut store = Store::seed();
        store.lang = Lang::En;
        store.find_unit_mut(2).unwrap().tag = UnitTag::Blue;

        repo.save(&store).unwrap();
        let loaded = repo.try_load().unwrap().unwrap();
        assert_eq!(loaded.lang, Lang::En);
        assert_eq!(loaded.find_unit(2).unwrap().tag, UnitTag::Blue);
    }

    #[test]
    fn test_save_overwrites_whole_document() {
        let repo = in_memory_repo();
        let store = Store::seed();
        repo.save(&store).unwrap();

        let mut modified = store.clone();
        modified.find_unit_mut(1).unwrap().tag = UnitTag::Red;
        repo.save(&modified).unwrap();

        let conn = repo.get_conn().unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM kv_store", [], |row| row.get(0))
            .unwrap();
        // 固定键下仅一份文档
        assert_eq!(count, 1);
    }

    #[test]
    fn test_corrupt_document_falls_back_to_seed() {
        let repo = in_memory_repo();
        {
            let conn = repo.get_conn().unwrap();
            conn.execute(
                "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)",
                params![STORE_KEY, "{not valid json", Utc::now().to_rfc3339()],
            )
            .unwrap();
        }

        assert!(repo.try_load().is_err());
        let store = repo.load_or_seed();
        assert_eq!(store.units.len(), 3);
    }
}
