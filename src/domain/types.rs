// ==========================================
// 游乐园设备维护管理系统 - 领域类型定义
// ==========================================
// 红线: 角色能力为等级门禁,不是评分制
// 序列化格式: 状态类枚举用 SCREAMING_SNAKE_CASE (与存储文档一致)
//             frequency/lang 用小写 (与历史持久化 JSON 兼容)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 角色 (Role)
// ==========================================
// 五类操作角色,所有工作流操作按角色门禁
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Ops,         // 运营经理
    TechManager, // 技术经理
    Supervisor,  // 现场主管
    Tech,        // 技术人员
    Operator,    // 操作员
}

impl Role {
    /// 全角色列表（测试与遍历用）
    pub const ALL: [Role; 5] = [
        Role::Ops,
        Role::TechManager,
        Role::Supervisor,
        Role::Tech,
        Role::Operator,
    ];

    /// 从字符串解析角色
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "OPS" => Some(Role::Ops),
            "TECH_MANAGER" => Some(Role::TechManager),
            "SUPERVISOR" => Some(Role::Supervisor),
            "TECH" => Some(Role::Tech),
            "OPERATOR" => Some(Role::Operator),
            _ => None,
        }
    }

    /// 转换为存储字符串
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Role::Ops => "OPS",
            Role::TechManager => "TECH_MANAGER",
            Role::Supervisor => "SUPERVISOR",
            Role::Tech => "TECH",
            Role::Operator => "OPERATOR",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

// ==========================================
// 设备标签 (Unit Tag)
// ==========================================
// 红线: 三态标签为唯一开放性依据
// 顺序: Red < Blue < Green (安全恢复路径: Red → Blue → Green)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitTag {
    Red,   // 关闭/不安全 (红牌)
    Blue,  // 进行中/待复批 (蓝牌)
    Green, // 技术批准/可开放 (绿牌)
}

impl UnitTag {
    /// 从字符串解析标签
    ///
    /// 兼容历史两态词汇: "Aktif" → Green, "Kırmızı Etiket" → Red
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Aktif" => return Some(UnitTag::Green),
            "Kırmızı Etiket" => return Some(UnitTag::Red),
            _ => {}
        }
        match s.to_uppercase().as_str() {
            "RED" => Some(UnitTag::Red),
            "BLUE" => Some(UnitTag::Blue),
            "GREEN" => Some(UnitTag::Green),
            _ => None,
        }
    }

    /// 转换为存储字符串
    pub fn to_db_str(&self) -> &'static str {
        match self {
            UnitTag::Red => "RED",
            UnitTag::Blue => "BLUE",
            UnitTag::Green => "GREEN",
        }
    }

    /// 是否可开放（仅绿牌可签开放）
    pub fn is_open_ready(&self) -> bool {
        matches!(self, UnitTag::Green)
    }
}

impl fmt::Display for UnitTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

// ==========================================
// 维护频率 (Frequency)
// ==========================================
// 序列化: 小写 (与历史持久化 JSON 兼容)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,   // 日检
    Weekly,  // 周检
    Monthly, // 月检
    Yearly,  // 年检
}

impl Frequency {
    pub const ALL: [Frequency; 4] = [
        Frequency::Daily,
        Frequency::Weekly,
        Frequency::Monthly,
        Frequency::Yearly,
    ];

    /// 从字符串解析频率
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "daily" => Some(Frequency::Daily),
            "weekly" => Some(Frequency::Weekly),
            "monthly" => Some(Frequency::Monthly),
            "yearly" => Some(Frequency::Yearly),
            _ => None,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Yearly => "yearly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

// ==========================================
// 语言 (Lang)
// ==========================================
// 持久化的界面偏好,不影响工作流判定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Tr, // 土耳其语（默认）
    En, // 英语
}

impl Lang {
    /// rust-i18n 语言代码
    pub fn locale_code(&self) -> &'static str {
        match self {
            Lang::Tr => "tr",
            Lang::En => "en",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.locale_code())
    }
}

// ==========================================
// 事故状态 (Incident Status)
// ==========================================
// 两态状态机: Open → Closed（重开产生新记录,不复用旧记录）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IncidentStatus {
    Open,   // 未处理
    Closed, // 已关闭（含原因与整改措施）
}

impl fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IncidentStatus::Open => write!(f, "OPEN"),
            IncidentStatus::Closed => write!(f, "CLOSED"),
        }
    }
}

// ==========================================
// 开放签字角色 (Opening Role)
// ==========================================
// 仅现场两类角色可签开放,类型层面收窄
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OpeningRole {
    Supervisor, // 现场主管
    Operator,   // 操作员
}

impl TryFrom<Role> for OpeningRole {
    type Error = Role;

    fn try_from(role: Role) -> Result<Self, Self::Error> {
        match role {
            Role::Supervisor => Ok(OpeningRole::Supervisor),
            Role::Operator => Ok(OpeningRole::Operator),
            other => Err(other),
        }
    }
}

impl fmt::Display for OpeningRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpeningRole::Supervisor => write!(f, "SUPERVISOR"),
            OpeningRole::Operator => write!(f, "OPERATOR"),
        }
    }
}

// ==========================================
// 技术便签作者 (Note Author)
// ==========================================
// 仅管理两角色可发起便签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NoteAuthor {
    Ops,         // 运营经理
    TechManager, // 技术经理
}

impl TryFrom<Role> for NoteAuthor {
    type Error = Role;

    fn try_from(role: Role) -> Result<Self, Self::Error> {
        match role {
            Role::Ops => Ok(NoteAuthor::Ops),
            Role::TechManager => Ok(NoteAuthor::TechManager),
            other => Err(other),
        }
    }
}

impl fmt::Display for NoteAuthor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteAuthor::Ops => write!(f, "OPS"),
            NoteAuthor::TechManager => write!(f, "TECH_MANAGER"),
        }
    }
}
