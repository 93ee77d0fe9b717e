// ==========================================
// 游乐园设备维护管理系统 - 事故生命周期引擎
// ==========================================
// 职责: 事故两态状态机 Open → Closed
// 红线: 开启事故无条件压红牌
// 红线: 关闭事故只到蓝牌,绿牌必须再经技术签核（两步恢复）
// ==========================================

use crate::domain::actor::Actor;
use crate::domain::incident::Incident;
use crate::domain::store::Store;
use crate::domain::types::{IncidentStatus, UnitTag};
use crate::engine::error::{WorkflowError, WorkflowResult};
use crate::engine::permissions;
use chrono::Utc;
use tracing::instrument;

// ==========================================
// IncidentCloseInput - 关闭输入
// ==========================================
#[derive(Debug, Clone)]
pub struct IncidentCloseInput {
    pub unit_id: i64,  // 设备标识
    pub cause: String, // 事故原因（必填）
    pub fix: String,   // 整改措施（必填）
}

// ==========================================
// IncidentEngine - 事故生命周期引擎
// ==========================================
pub struct IncidentEngine;

impl IncidentEngine {
    pub fn new() -> Self {
        Self
    }

    /// 开启事故
    ///
    /// # 前提
    /// 1. actor 可报告事故（操作员/主管/技术人员）
    /// 2. 设备存在
    /// 3. 该设备无未关闭事故
    ///
    /// # 效果
    /// 新建 OPEN 事故记录; 设备标签无条件压为红牌
    #[instrument(skip(self, store), fields(unit_id))]
    pub fn open_incident(
        &self,
        store: &Store,
        actor: &Actor,
        unit_id: i64,
    ) -> WorkflowResult<Store> {
        if !permissions::can_report_incident(actor.role) {
            return Err(WorkflowError::NotAuthorized {
                role: actor.role,
                operation: "open_incident",
            });
        }

        if store.find_unit(unit_id).is_none() {
            return Err(WorkflowError::UnitNotFound { unit_id });
        }

        if store.has_open_incident(unit_id) {
            return Err(WorkflowError::IncidentAlreadyOpen { unit_id });
        }

        let mut updated = store.clone();
        updated
            .incidents
            .push(Incident::open(unit_id, actor.role, actor.signer_name()));
        if let Some(unit) = updated.find_unit_mut(unit_id) {
            unit.tag = UnitTag::Red;
        }

        Ok(updated)
    }

    /// 关闭事故
    ///
    /// # 前提
    /// 1. actor 具备技术维护能力
    /// 2. 该设备存在未关闭事故
    /// 3. cause 与 fix 均为非空文本
    ///
    /// # 效果
    /// 盖章关闭时间/原因/措施; 设备标签置为蓝牌（待复批）。
    /// 核心安全不变量: 关闭事故从不直接给绿牌 —
    /// 恢复开放必须再经一次全勾的例行维护签核。
    #[instrument(skip(self, store, input), fields(unit_id = input.unit_id))]
    pub fn close_incident(
        &self,
        store: &Store,
        actor: &Actor,
        input: IncidentCloseInput,
    ) -> WorkflowResult<Store> {
        if !permissions::can_perform_technical_work(actor.role) {
            return Err(WorkflowError::NotAuthorized {
                role: actor.role,
                operation: "close_incident",
            });
        }

        if store.find_unit(input.unit_id).is_none() {
            return Err(WorkflowError::UnitNotFound {
                unit_id: input.unit_id,
            });
        }

        if store.open_incident_for(input.unit_id).is_none() {
            return Err(WorkflowError::NoOpenIncident {
                unit_id: input.unit_id,
            });
        }

        let cause = input.cause.trim();
        let fix = input.fix.trim();
        if cause.is_empty() || fix.is_empty() {
            return Err(WorkflowError::CauseAndFixRequired);
        }

        let mut updated = store.clone();
        let incident = updated
            .incidents
            .iter_mut()
            .find(|i| i.unit_id == input.unit_id && i.is_open())
            .expect("open incident checked above");
        incident.status = IncidentStatus::Closed;
        incident.cause = Some(cause.to_string());
        incident.fix = Some(fix.to_string());
        incident.closed_by_name = Some(actor.signer_name());
        incident.closed_at = Some(Utc::now());

        // 待复批,绝不直接绿牌
        if let Some(unit) = updated.find_unit_mut(input.unit_id) {
            unit.tag = UnitTag::Blue;
        }

        Ok(updated)
    }
}

impl Default for IncidentEngine {
    fn default() -> Self {
        Self::new()
    }
}
