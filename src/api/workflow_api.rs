// ==========================================
// 游乐园设备维护管理系统 - 工作流 API
// ==========================================
// 职责: 每个操作按 读取 → 引擎 → 保存 编排
// 红线: 业务规则全部在引擎层,此处只做装配与持久化
// 红线: 保存失败记 warn 并照常返回内存结果（读取侧回退种子兜底）
// ==========================================

use std::sync::Arc;

use crate::config::WorkflowConfig;
use crate::domain::actor::Actor;
use crate::domain::incident::Incident;
use crate::domain::note::TechNote;
use crate::domain::opening::OpeningSignature;
use crate::domain::store::Store;
use crate::domain::types::{Frequency, Lang, Role, UnitTag};
use crate::domain::unit::{Unit, UnitPatch};
use crate::engine::incident::{IncidentCloseInput, IncidentEngine};
use crate::engine::maintenance::{MaintenanceEngine, MaintenanceInput};
use crate::engine::notes::NoteEngine;
use crate::engine::opening::{OpeningEngine, OpeningInput};
use crate::engine::permissions;
use crate::engine::unit_admin::UnitAdminEngine;
use crate::repository::store_repo::StoreRepository;
use chrono::NaiveDate;

use super::error::ApiResult;

// ==========================================
// DTO 类型定义
// ==========================================

/// 维护签核结果（引擎决策的对外投影）
#[derive(Debug, Clone)]
pub struct MaintenanceReceipt {
    pub derived_tag: Option<UnitTag>, // 派生出的新标签（None = 未变更）
    pub reasons: Vec<String>,         // 决策原因
}

/// 设备详情（单设备聚合视图）
#[derive(Debug, Clone)]
pub struct UnitDetail {
    pub unit: Unit,                      // 设备主数据
    pub open_incident: Option<Incident>, // 当前未关闭事故
    pub openings: Vec<OpeningSignature>, // 该设备的开放签字
    pub notes: Vec<TechNote>,            // 该设备的技术便签
}

// ==========================================
// WorkflowApi - 工作流 API
// ==========================================

/// 工作流API
///
/// 职责：
/// 1. 装配仓储与各引擎
/// 2. 每个操作: 读取快照 → 引擎判定 → 整体保存
/// 3. 查询投影（可见设备、设备详情）
pub struct WorkflowApi {
    repo: Arc<dyn StoreRepository>,
    maintenance: MaintenanceEngine,
    opening: OpeningEngine,
    incident: IncidentEngine,
    unit_admin: UnitAdminEngine,
    notes: NoteEngine,
}

impl WorkflowApi {
    /// 创建新的WorkflowApi实例
    pub fn new(repo: Arc<dyn StoreRepository>, config: WorkflowConfig) -> Self {
        Self {
            repo,
            maintenance: MaintenanceEngine::new(config),
            opening: OpeningEngine::new(),
            incident: IncidentEngine::new(),
            unit_admin: UnitAdminEngine::new(),
            notes: NoteEngine::new(),
        }
    }

    /// 当前存储快照（缺失/损坏回退种子）
    pub fn snapshot(&self) -> Store {
        self.repo.load_or_seed()
    }

    /// 整体保存; 失败只记 warn,不阻断已判定的内存结果
    fn persist(&self, store: &Store) {
        if let Err(e) = self.repo.save(store) {
            tracing::warn!("存储文档保存失败,内存结果照常返回: {}", e);
        }
    }

    // ==========================================
    // 工作流操作
    // ==========================================

    /// 记录维护签核（含标签派生）
    pub fn record_maintenance(
        &self,
        actor: &Actor,
        input: MaintenanceInput,
    ) -> ApiResult<MaintenanceReceipt> {
        let store = self.snapshot();
        let outcome = self.maintenance.record_maintenance(&store, actor, input)?;
        self.persist(&outcome.store);
        Ok(MaintenanceReceipt {
            derived_tag: outcome.derived_tag,
            reasons: outcome.reasons,
        })
    }

    /// 当日开放签字
    pub fn sign_opening(&self, actor: &Actor, input: OpeningInput) -> ApiResult<()> {
        let store = self.snapshot();
        let updated = self.opening.sign_opening(&store, actor, input)?;
        self.persist(&updated);
        Ok(())
    }

    /// 开启事故（设备无条件压红牌）
    pub fn open_incident(&self, actor: &Actor, unit_id: i64) -> ApiResult<()> {
        let store = self.snapshot();
        let updated = self.incident.open_incident(&store, actor, unit_id)?;
        self.persist(&updated);
        Ok(())
    }

    /// 关闭事故（设备转蓝牌待复批）
    pub fn close_incident(&self, actor: &Actor, input: IncidentCloseInput) -> ApiResult<()> {
        let store = self.snapshot();
        let updated = self.incident.close_incident(&store, actor, input)?;
        self.persist(&updated);
        Ok(())
    }

    /// 更新设备元数据（含人工标签覆写）
    pub fn update_unit(&self, actor: &Actor, unit_id: i64, patch: UnitPatch) -> ApiResult<()> {
        let store = self.snapshot();
        let updated = self.unit_admin.update_unit(&store, actor, unit_id, patch)?;
        self.persist(&updated);
        Ok(())
    }

    /// 发起技术便签
    pub fn add_note(
        &self,
        actor: &Actor,
        unit_id: i64,
        date: NaiveDate,
        text: &str,
    ) -> ApiResult<()> {
        let store = self.snapshot();
        let updated = self.notes.add_note(&store, actor, unit_id, date, text)?;
        self.persist(&updated);
        Ok(())
    }

    /// 回复技术便签
    pub fn answer_note(
        &self,
        actor: &Actor,
        note_id: &str,
        date: NaiveDate,
        text: &str,
    ) -> ApiResult<()> {
        let store = self.snapshot();
        let updated = self.notes.answer_note(&store, actor, note_id, date, text)?;
        self.persist(&updated);
        Ok(())
    }

    // ==========================================
    // 界面偏好（持久化,不参与门禁）
    // ==========================================

    /// 设置界面语言
    pub fn set_lang(&self, lang: Lang) -> ApiResult<()> {
        let mut store = self.snapshot();
        store.lang = lang;
        self.persist(&store);
        Ok(())
    }

    /// 设置界面默认角色（仅作下次启动的预选值）
    pub fn set_default_role(&self, role: Role) -> ApiResult<()> {
        let mut store = self.snapshot();
        store.role = role;
        self.persist(&store);
        Ok(())
    }

    // ==========================================
    // 查询投影（只读,不保存）
    // ==========================================

    /// 按角色过滤的可见设备列表
    pub fn list_visible_units(&self, role: Role) -> Vec<Unit> {
        let store = self.snapshot();
        permissions::visible_units(&store, role)
            .into_iter()
            .cloned()
            .collect()
    }

    /// 单设备聚合视图
    pub fn get_unit_detail(&self, unit_id: i64) -> Option<UnitDetail> {
        let store = self.snapshot();
        let unit = store.find_unit(unit_id)?.clone();
        Some(UnitDetail {
            open_incident: store.open_incident_for(unit_id).cloned(),
            openings: store
                .openings
                .iter()
                .filter(|s| s.unit_id == unit_id)
                .cloned()
                .collect(),
            notes: store
                .tech_notes
                .iter()
                .filter(|n| n.unit_id == unit_id)
                .cloned()
                .collect(),
            unit,
        })
    }

    /// 按业务键查维护记录（检查表界面回显用）
    pub fn get_maintenance_record(
        &self,
        unit_id: i64,
        frequency: Frequency,
        date: NaiveDate,
    ) -> Option<crate::domain::checklist::MaintenanceRecord> {
        self.snapshot()
            .find_record(unit_id, frequency, date)
            .cloned()
    }
}
