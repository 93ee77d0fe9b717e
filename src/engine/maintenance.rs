// ==========================================
// 游乐园设备维护管理系统 - 维护签核引擎
// ==========================================
// 职责: 维护记录幂等覆写 + 显式标签派生
// 红线: 引擎不写库,只克隆更新并返回新 Store
// 红线: 拒绝时输入 Store 原样不动
// ==========================================
// 输入: Store + Actor + MaintenanceInput
// 输出: MaintenanceOutcome (新 Store / 派生标签 / 决策原因)
// ==========================================

use crate::config::WorkflowConfig;
use crate::domain::actor::Actor;
use crate::domain::checklist::{ItemCheck, MaintenanceRecord};
use crate::domain::store::Store;
use crate::domain::types::{Frequency, UnitTag};
use crate::engine::error::{WorkflowError, WorkflowResult};
use crate::engine::permissions;
use crate::engine::tag_rules::TagRules;
use chrono::{NaiveDate, Utc};
use tracing::instrument;

// ==========================================
// MaintenanceInput - 签核输入
// ==========================================
#[derive(Debug, Clone)]
pub struct MaintenanceInput {
    pub unit_id: i64,          // 设备标识
    pub frequency: Frequency,  // 维护频率
    pub date: NaiveDate,       // 维护日期
    pub items: Vec<ItemCheck>, // 逐条勾选状态
    pub notes: Option<String>, // 备注（可空）
}

// ==========================================
// MaintenanceOutcome - 签核结果
// ==========================================
#[derive(Debug, Clone)]
pub struct MaintenanceOutcome {
    pub store: Store,                  // 更新后的聚合
    pub derived_tag: Option<UnitTag>,  // 派生出的新标签（None = 未变更）
    pub reasons: Vec<String>,          // 决策原因（可解释性）
}

// ==========================================
// MaintenanceEngine - 维护签核引擎
// ==========================================
pub struct MaintenanceEngine {
    config: WorkflowConfig,
}

impl MaintenanceEngine {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    /// 记录维护签核
    ///
    /// # 前提
    /// 1. actor 具备技术维护能力
    /// 2. 签字人姓名非空
    /// 3. 设备存在
    ///
    /// # 效果
    /// - 按 (unit, frequency, date) 键覆写维护记录（后写覆盖,不合并）
    /// - 之后显式调用标签派生（TagRules::derive_after_maintenance）
    #[instrument(skip(self, store, input), fields(unit_id = input.unit_id, frequency = %input.frequency))]
    pub fn record_maintenance(
        &self,
        store: &Store,
        actor: &Actor,
        input: MaintenanceInput,
    ) -> WorkflowResult<MaintenanceOutcome> {
        // === 步骤 1: 权限检查 ===
        if !permissions::can_perform_technical_work(actor.role) {
            return Err(WorkflowError::NotAuthorized {
                role: actor.role,
                operation: "record_maintenance",
            });
        }

        // === 步骤 2: 签字人校验 ===
        if !actor.has_name() {
            return Err(WorkflowError::SignerRequired);
        }

        // === 步骤 3: 设备存在性 ===
        if store.find_unit(input.unit_id).is_none() {
            return Err(WorkflowError::UnitNotFound {
                unit_id: input.unit_id,
            });
        }

        let mut updated = store.clone();
        let mut reasons = Vec::new();

        // === 步骤 4: 幂等覆写（同键旧记录整体移除）===
        let before = updated.logs.len();
        updated
            .logs
            .retain(|l| !l.matches_key(input.unit_id, input.frequency, input.date));
        if updated.logs.len() < before {
            reasons.push(format!(
                "同键记录被覆写: unit={}, freq={}, date={}",
                input.unit_id, input.frequency, input.date
            ));
        }

        let record = MaintenanceRecord {
            unit_id: input.unit_id,
            frequency: input.frequency,
            date: input.date,
            items: input.items,
            notes: input.notes,
            signer_name: actor.signer_name(),
            signer_role: actor.role,
            signed_at: Utc::now(),
        };
        let all_checked = record.all_checked(updated.template_for(input.frequency));
        updated.logs.push(record);

        // === 步骤 5: 显式标签派生 ===
        let current_tag = updated
            .find_unit(input.unit_id)
            .map(|u| u.tag)
            .expect("unit checked above");
        let (derived_tag, derive_reasons) = TagRules::derive_after_maintenance(
            current_tag,
            input.frequency,
            all_checked,
            updated.has_open_incident(input.unit_id),
            &self.config.tag_driving_frequencies,
        );
        reasons.extend(derive_reasons);

        if let Some(new_tag) = derived_tag {
            if let Some(unit) = updated.find_unit_mut(input.unit_id) {
                unit.tag = new_tag;
            }
        }

        Ok(MaintenanceOutcome {
            store: updated,
            derived_tag,
            reasons,
        })
    }
}
