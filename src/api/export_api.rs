// ==========================================
// 游乐园设备维护管理系统 - 导入导出 API
// ==========================================
// 职责: 整体快照 JSON 备份/恢复 + 维护记录 CSV 报表
// 红线: 导入前必须按当前模型解析成功,坏文档不落库
// ==========================================

use std::sync::Arc;

use crate::domain::store::Store;
use crate::domain::types::OpeningRole;
use crate::repository::store_repo::StoreRepository;
use csv::WriterBuilder;

use super::error::{ApiError, ApiResult};

// ==========================================
// ExportApi - 导入导出 API
// ==========================================
pub struct ExportApi {
    repo: Arc<dyn StoreRepository>,
}

impl ExportApi {
    pub fn new(repo: Arc<dyn StoreRepository>) -> Self {
        Self { repo }
    }

    /// 导出整体快照为 JSON（美化格式,离线备份用）
    pub fn export_store_json(&self) -> ApiResult<String> {
        let store = self.repo.load_or_seed();
        serde_json::to_string_pretty(&store)
            .map_err(|e| ApiError::ExportError(format!("快照序列化失败: {}", e)))
    }

    /// 从 JSON 恢复整体快照
    ///
    /// 先按当前模型解析,成功后整体覆写; 解析失败时现有数据保持原样
    pub fn import_store_json(&self, json: &str) -> ApiResult<()> {
        let store: Store = serde_json::from_str(json)
            .map_err(|e| ApiError::ImportError(format!("备份文档解析失败: {}", e)))?;
        self.repo.save(&store)?;
        tracing::info!(
            units = store.units.len(),
            logs = store.logs.len(),
            "备份文档导入完成"
        );
        Ok(())
    }

    /// 导出维护记录 CSV 报表
    ///
    /// 每条检查项一行; 检查项文案按快照当前语言渲染;
    /// 当日开放签字（主管/操作员）并入同行,便于审计对照。
    pub fn export_maintenance_csv(&self) -> ApiResult<String> {
        let store = self.repo.load_or_seed();

        let mut writer = WriterBuilder::new().from_writer(Vec::new());
        writer
            .write_record([
                "unit_id",
                "date",
                "item_id",
                "item_text",
                "done",
                "notes",
                "supervisor_signed",
                "operator_signed",
            ])
            .map_err(|e| ApiError::ExportError(e.to_string()))?;

        for record in &store.logs {
            let template = store.template_for(record.frequency);
            let supervisor = opening_name(&store, record.unit_id, record.date, OpeningRole::Supervisor);
            let operator = opening_name(&store, record.unit_id, record.date, OpeningRole::Operator);

            for check in &record.items {
                let item_text = template
                    .iter()
                    .find(|t| t.item_id == check.item_id)
                    .map(|t| t.title(store.lang))
                    .unwrap_or_default();

                writer
                    .write_record([
                        record.unit_id.to_string().as_str(),
                        record.date.to_string().as_str(),
                        check.item_id.to_string().as_str(),
                        item_text,
                        if check.checked { "1" } else { "0" },
                        record.notes.as_deref().unwrap_or(""),
                        supervisor.as_deref().unwrap_or(""),
                        operator.as_deref().unwrap_or(""),
                    ])
                    .map_err(|e| ApiError::ExportError(e.to_string()))?;
            }
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ApiError::ExportError(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| ApiError::ExportError(e.to_string()))
    }
}

/// (设备, 日期, 角色) 的开放签字人姓名
fn opening_name(
    store: &Store,
    unit_id: i64,
    date: chrono::NaiveDate,
    role: OpeningRole,
) -> Option<String> {
    store
        .openings
        .iter()
        .find(|s| s.matches_key(unit_id, date, role))
        .map(|s| s.name.clone())
}
