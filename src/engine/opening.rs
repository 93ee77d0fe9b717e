// ==========================================
// 游乐园设备维护管理系统 - 开放签字引擎
// ==========================================
// 职责: 当日开放签字,门禁于技术批准(绿牌)
// 红线: 非绿牌设备的签字尝试不得触碰签字日志
// ==========================================

use crate::domain::actor::Actor;
use crate::domain::opening::OpeningSignature;
use crate::domain::store::Store;
use crate::domain::types::OpeningRole;
use crate::engine::error::{WorkflowError, WorkflowResult};
use crate::engine::permissions;
use chrono::{NaiveDate, Utc};
use tracing::instrument;

// ==========================================
// OpeningInput - 签字输入
// ==========================================
#[derive(Debug, Clone)]
pub struct OpeningInput {
    pub unit_id: i64,    // 设备标识
    pub date: NaiveDate, // 开放日期
}

// ==========================================
// OpeningEngine - 开放签字引擎
// ==========================================
pub struct OpeningEngine;

impl OpeningEngine {
    pub fn new() -> Self {
        Self
    }

    /// 记录当日开放签字
    ///
    /// # 前提
    /// 1. actor 为现场角色（主管/操作员）
    /// 2. 设备存在且标签为绿牌（技术批准）
    /// 3. 签字人姓名非空
    /// 4. 同 (设备, 日期, 角色) 尚无签字
    #[instrument(skip(self, store), fields(unit_id = input.unit_id, date = %input.date))]
    pub fn sign_opening(
        &self,
        store: &Store,
        actor: &Actor,
        input: OpeningInput,
    ) -> WorkflowResult<Store> {
        // === 步骤 1: 权限检查（类型层面同时收窄角色）===
        let opening_role = OpeningRole::try_from(actor.role).map_err(|role| {
            WorkflowError::NotAuthorized {
                role,
                operation: "sign_opening",
            }
        })?;
        debug_assert!(permissions::can_perform_opening_signature(actor.role));

        // === 步骤 2: 技术批准检查 ===
        let unit = store
            .find_unit(input.unit_id)
            .ok_or(WorkflowError::UnitNotFound {
                unit_id: input.unit_id,
            })?;
        if !unit.tag.is_open_ready() {
            return Err(WorkflowError::TechnicalApprovalRequired {
                unit_id: unit.unit_id,
                tag: unit.tag,
            });
        }

        // === 步骤 3: 签字人校验 ===
        if !actor.has_name() {
            return Err(WorkflowError::SignerRequired);
        }

        // === 步骤 4: 同键去重 ===
        if store.opening_signed(input.unit_id, input.date, opening_role) {
            return Err(WorkflowError::AlreadySigned {
                unit_id: input.unit_id,
                date: input.date,
                role: opening_role,
            });
        }

        // === 步骤 5: 追加签字 ===
        let mut updated = store.clone();
        updated.openings.push(OpeningSignature {
            unit_id: input.unit_id,
            date: input.date,
            role: opening_role,
            name: actor.signer_name(),
            signed_at: Utc::now(),
        });

        Ok(updated)
    }
}

impl Default for OpeningEngine {
    fn default() -> Self {
        Self::new()
    }
}
