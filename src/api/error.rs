// ==========================================
// 游乐园设备维护管理系统 - API层错误类型
// ==========================================
// 职责: 汇聚工作流拒绝与仓储失败,转换为用户可读的错误消息
// 红线: 所有错误信息必须包含显式原因（可解释性）
// ==========================================

use crate::domain::types::Lang;
use crate::engine::error::{WorkflowError, WorkflowErrorKind};
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 工作流拒绝（引擎返回,Store 保持原样）
    // ==========================================
    #[error("工作流拒绝: {0}")]
    WorkflowDenied(#[from] WorkflowError),

    // ==========================================
    // 业务输入错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    // ==========================================
    // 数据访问错误
    // ==========================================
    #[error("数据库错误: {0}")]
    DatabaseError(String),

    #[error("数据库连接失败: {0}")]
    DatabaseConnectionError(String),

    // ==========================================
    // 导入/导出错误
    // ==========================================
    #[error("文件导入失败: {0}")]
    ImportError(String),

    #[error("导出失败: {0}")]
    ExportError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 RepositoryError 转换
// 目的: 将仓储层的技术错误转换为用户友好的业务错误
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DatabaseConnectionError(msg) => ApiError::DatabaseConnectionError(msg),
            RepositoryError::LockError(msg) => {
                ApiError::DatabaseConnectionError(format!("数据库锁获取失败: {}", msg))
            }
            RepositoryError::DatabaseQueryError(msg) => ApiError::DatabaseError(msg),
            RepositoryError::SerializationError(msg) => {
                ApiError::InternalError(format!("存储文档序列化失败: {}", msg))
            }
            RepositoryError::DeserializationError(msg) => {
                ApiError::ImportError(format!("存储文档解析失败: {}", msg))
            }
            RepositoryError::InternalError(msg) => ApiError::InternalError(msg),
            RepositoryError::Other(err) => ApiError::Other(err),
        }
    }
}

impl ApiError {
    /// 工作流拒绝的三分类（非工作流错误返回 None）
    pub fn workflow_kind(&self) -> Option<WorkflowErrorKind> {
        match self {
            ApiError::WorkflowDenied(err) => Some(err.kind()),
            _ => None,
        }
    }

    /// 按界面语言渲染用户提示
    ///
    /// 工作流拒绝走 i18n 键; 其余错误直接使用 Display 文案
    pub fn user_message(&self, lang: Lang) -> String {
        match self {
            ApiError::WorkflowDenied(err) => {
                rust_i18n::t!(err.message_key(), locale = lang.locale_code()).to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
