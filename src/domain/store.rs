// ==========================================
// 游乐园设备维护管理系统 - 聚合根 Store
// ==========================================
// 红线: Store 为唯一事实层,持久化层整体快照存取
// 红线: store.role 仅为界面偏好,工作流门禁只看显式传入的 Actor
// 兼容: 反序列化逐字段回退默认值（缺字段不致整体失败）
// ==========================================

use crate::domain::checklist::{ChecklistItem, MaintenanceRecord};
use crate::domain::incident::Incident;
use crate::domain::note::TechNote;
use crate::domain::opening::OpeningSignature;
use crate::domain::types::{Frequency, Lang, OpeningRole, Role, UnitTag};
use crate::domain::unit::Unit;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 持久化文档的固定键（整体快照存于此键之下）
pub const STORE_KEY: &str = "lunapark_bakim_store_v2";

// ==========================================
// Store - 聚合根
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    // ===== 界面偏好（持久化,不参与门禁）=====
    #[serde(default = "default_lang")]
    pub lang: Lang, // 界面语言
    #[serde(default = "default_role")]
    pub role: Role, // 上次选择的角色（仅作界面默认值）

    // ===== 主数据 =====
    #[serde(default = "default_units")]
    pub units: Vec<Unit>, // 设备列表（只增不删）
    #[serde(default = "default_templates")]
    pub templates: HashMap<Frequency, Vec<ChecklistItem>>, // 检查表模板（静态目录）

    // ===== 事务日志 =====
    #[serde(default)]
    pub logs: Vec<MaintenanceRecord>, // 维护签核记录
    #[serde(default)]
    pub openings: Vec<OpeningSignature>, // 开放签字
    #[serde(default)]
    pub incidents: Vec<Incident>, // 事故记录
    #[serde(default)]
    pub tech_notes: Vec<TechNote>, // 技术便签
}

impl Default for Store {
    fn default() -> Self {
        Self::seed()
    }
}

impl Store {
    /// 默认种子数据（首次启动或持久化损坏时回退）
    pub fn seed() -> Self {
        Self {
            lang: default_lang(),
            role: default_role(),
            units: default_units(),
            templates: default_templates(),
            logs: Vec::new(),
            openings: Vec::new(),
            incidents: Vec::new(),
            tech_notes: Vec::new(),
        }
    }

    // ==========================================
    // 查询辅助（纯投影,不做变更）
    // ==========================================

    pub fn find_unit(&self, unit_id: i64) -> Option<&Unit> {
        self.units.iter().find(|u| u.unit_id == unit_id)
    }

    pub fn find_unit_mut(&mut self, unit_id: i64) -> Option<&mut Unit> {
        self.units.iter_mut().find(|u| u.unit_id == unit_id)
    }

    /// 指定频率的模板条目（未配置返回空切片）
    pub fn template_for(&self, frequency: Frequency) -> &[ChecklistItem] {
        self.templates
            .get(&frequency)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// 按业务键查维护记录
    pub fn find_record(
        &self,
        unit_id: i64,
        frequency: Frequency,
        date: NaiveDate,
    ) -> Option<&MaintenanceRecord> {
        self.logs
            .iter()
            .find(|l| l.matches_key(unit_id, frequency, date))
    }

    /// 设备当前未关闭事故
    pub fn open_incident_for(&self, unit_id: i64) -> Option<&Incident> {
        self.incidents
            .iter()
            .find(|i| i.unit_id == unit_id && i.is_open())
    }

    pub fn has_open_incident(&self, unit_id: i64) -> bool {
        self.open_incident_for(unit_id).is_some()
    }

    /// 指定 (设备, 日期, 角色) 是否已有开放签字
    pub fn opening_signed(&self, unit_id: i64, date: NaiveDate, role: OpeningRole) -> bool {
        self.openings
            .iter()
            .any(|s| s.matches_key(unit_id, date, role))
    }

    pub fn find_note(&self, note_id: &str) -> Option<&TechNote> {
        self.tech_notes.iter().find(|n| n.note_id == note_id)
    }
}

// ==========================================
// 种子数据
// ==========================================

fn default_lang() -> Lang {
    Lang::Tr
}

fn default_role() -> Role {
    Role::Tech
}

fn default_units() -> Vec<Unit> {
    vec![
        Unit {
            unit_id: 1,
            name: "Dönme Dolap".to_string(),
            tag: UnitTag::Green,
            manufacturer: Some("SBF/Visa".to_string()),
            year: Some("2021".to_string()),
            ndt_date: None,
            photo_ref: None,
        },
        Unit {
            unit_id: 2,
            name: "Çarpışan Arabalar".to_string(),
            tag: UnitTag::Green,
            manufacturer: Some("IE Park".to_string()),
            year: Some("2019".to_string()),
            ndt_date: None,
            photo_ref: None,
        },
        Unit {
            unit_id: 3,
            name: "Gondol".to_string(),
            tag: UnitTag::Red,
            manufacturer: Some("Fabbri".to_string()),
            year: Some("2017".to_string()),
            ndt_date: None,
            photo_ref: None,
        },
    ]
}

fn default_templates() -> HashMap<Frequency, Vec<ChecklistItem>> {
    let mut templates = HashMap::new();
    templates.insert(
        Frequency::Daily,
        vec![
            ChecklistItem::new(1, "Emniyet kemerleri/Barlar kontrol edildi", "Restraints checked"),
            ChecklistItem::new(2, "Operatör paneli test edildi", "Operator panel tested"),
            ChecklistItem::new(3, "Alan güvenliği sağlandı", "Area secured"),
        ],
    );
    templates.insert(
        Frequency::Weekly,
        vec![
            ChecklistItem::new(11, "Cıvata ve bağlantılar tork kontrolü", "Bolts & fasteners torque"),
            ChecklistItem::new(12, "Zincir/Kayış görsel kontrol", "Chain/belt visual check"),
        ],
    );
    templates.insert(
        Frequency::Monthly,
        vec![
            ChecklistItem::new(21, "Yağlama ve gres noktaları", "Lubrication/grease points"),
            ChecklistItem::new(22, "Elektrik pano bağlantı kontrolü", "Electrical cabinet check"),
        ],
    );
    templates.insert(
        Frequency::Yearly,
        vec![
            ChecklistItem::new(31, "Yıllık genel bakım", "Annual general maintenance"),
            ChecklistItem::new(32, "Kapsamlı emniyet testleri", "Comprehensive safety tests"),
        ],
    );
    templates
}
