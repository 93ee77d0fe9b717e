// ==========================================
// 游乐园设备维护管理系统 - 技术便签引擎
// ==========================================
// 职责: 管理角色发起便签,技术经理回复
// ==========================================

use crate::domain::actor::Actor;
use crate::domain::note::{NoteReply, TechNote};
use crate::domain::store::Store;
use crate::domain::types::{NoteAuthor, Role};
use crate::engine::error::{WorkflowError, WorkflowResult};
use chrono::NaiveDate;
use tracing::instrument;

// ==========================================
// NoteEngine - 技术便签引擎
// ==========================================
pub struct NoteEngine;

impl NoteEngine {
    pub fn new() -> Self {
        Self
    }

    /// 发起技术便签（仅 OPS / TECH_MANAGER）
    ///
    /// 新便签插入列表头部（最近优先,与历史展示顺序一致）
    #[instrument(skip(self, store, text), fields(unit_id))]
    pub fn add_note(
        &self,
        store: &Store,
        actor: &Actor,
        unit_id: i64,
        date: NaiveDate,
        text: &str,
    ) -> WorkflowResult<Store> {
        let author = NoteAuthor::try_from(actor.role).map_err(|role| {
            WorkflowError::NotAuthorized {
                role,
                operation: "add_note",
            }
        })?;

        if store.find_unit(unit_id).is_none() {
            return Err(WorkflowError::UnitNotFound { unit_id });
        }

        let text = text.trim();
        if text.is_empty() {
            return Err(WorkflowError::EmptyText { field: "note_text" });
        }

        let mut updated = store.clone();
        updated
            .tech_notes
            .insert(0, TechNote::new(unit_id, date, author, text));

        Ok(updated)
    }

    /// 回复便签（仅技术经理,且便签尚未回复）
    #[instrument(skip(self, store, text), fields(note_id))]
    pub fn answer_note(
        &self,
        store: &Store,
        actor: &Actor,
        note_id: &str,
        date: NaiveDate,
        text: &str,
    ) -> WorkflowResult<Store> {
        if actor.role != Role::TechManager {
            return Err(WorkflowError::NotAuthorized {
                role: actor.role,
                operation: "answer_note",
            });
        }

        let note = store
            .find_note(note_id)
            .ok_or_else(|| WorkflowError::NoteNotFound {
                note_id: note_id.to_string(),
            })?;
        if note.is_answered() {
            return Err(WorkflowError::NoteAlreadyAnswered {
                note_id: note_id.to_string(),
            });
        }

        let text = text.trim();
        if text.is_empty() {
            return Err(WorkflowError::EmptyText { field: "reply_text" });
        }

        let mut updated = store.clone();
        let note = updated
            .tech_notes
            .iter_mut()
            .find(|n| n.note_id == note_id)
            .expect("note checked above");
        note.reply = Some(NoteReply {
            date,
            text: text.to_string(),
        });

        Ok(updated)
    }
}

impl Default for NoteEngine {
    fn default() -> Self {
        Self::new()
    }
}
