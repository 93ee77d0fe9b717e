// ==========================================
// 游乐园设备维护管理系统 - 设备管理引擎
// ==========================================
// 职责: 管理角色的设备元数据编辑与人工标签覆写
// 红线: 存在未关闭事故时禁止人工解除红牌
// ==========================================

use crate::domain::actor::Actor;
use crate::domain::store::Store;
use crate::domain::types::UnitTag;
use crate::domain::unit::UnitPatch;
use crate::engine::error::{WorkflowError, WorkflowResult};
use crate::engine::permissions;
use tracing::instrument;

// ==========================================
// UnitAdminEngine - 设备管理引擎
// ==========================================
pub struct UnitAdminEngine;

impl UnitAdminEngine {
    pub fn new() -> Self {
        Self
    }

    /// 更新设备元数据（含人工标签覆写）
    ///
    /// # 前提
    /// 1. actor 为管理角色（OPS / TECH_MANAGER）
    /// 2. 设备存在
    /// 3. 覆写标签为 GREEN/BLUE 时该设备不得有未关闭事故
    ///    （红牌解除归事故生命周期管）
    #[instrument(skip(self, store, patch), fields(unit_id))]
    pub fn update_unit(
        &self,
        store: &Store,
        actor: &Actor,
        unit_id: i64,
        patch: UnitPatch,
    ) -> WorkflowResult<Store> {
        if !permissions::can_edit_unit_metadata(actor.role) {
            return Err(WorkflowError::NotAuthorized {
                role: actor.role,
                operation: "update_unit",
            });
        }

        if store.find_unit(unit_id).is_none() {
            return Err(WorkflowError::UnitNotFound { unit_id });
        }

        if let Some(new_tag) = patch.tag {
            if new_tag != UnitTag::Red && store.has_open_incident(unit_id) {
                return Err(WorkflowError::TagOverrideBlocked { unit_id });
            }
        }

        let mut updated = store.clone();
        let unit = updated.find_unit_mut(unit_id).expect("unit checked above");

        if let Some(name) = patch.name {
            unit.name = name;
        }
        if let Some(manufacturer) = patch.manufacturer {
            unit.manufacturer = Some(manufacturer);
        }
        if let Some(year) = patch.year {
            unit.year = Some(year);
        }
        if let Some(ndt_date) = patch.ndt_date {
            unit.ndt_date = Some(ndt_date);
        }
        if let Some(photo_ref) = patch.photo_ref {
            unit.photo_ref = Some(photo_ref);
        }
        if let Some(tag) = patch.tag {
            unit.tag = tag;
        }

        Ok(updated)
    }
}

impl Default for UnitAdminEngine {
    fn default() -> Self {
        Self::new()
    }
}
