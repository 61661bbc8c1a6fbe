// ==========================================
// 产能利用率计算器 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换引擎/导出错误为用户可读的消息
// ==========================================

use crate::engine::error::InputError;
use crate::export::error::ExportError;
use crate::i18n::t_in;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误 (消息直接展示给用户)
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("无效邮箱: {0}")]
    InvalidEmail(String),

    // ==========================================
    // 导出错误
    // ==========================================
    #[error("导出失败: {0}")]
    ExportFailed(String),

    // ==========================================
    // 配置错误
    // ==========================================
    #[error("配置错误: {0}")]
    ConfigError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// 按语言转换输入错误
    pub fn from_input_error(err: InputError, locale: &str) -> Self {
        match err {
            InputError::NonPositiveCapacity { max_capacity } => {
                tracing::warn!(max_capacity, "最大产能非正，拒绝计算");
                ApiError::InvalidInput(t_in(locale, "message.invalid_capacity"))
            }
        }
    }

    /// 按语言转换导出错误
    pub fn from_export_error(err: ExportError, locale: &str) -> Self {
        match err {
            ExportError::InvalidEmail(_) => {
                ApiError::InvalidEmail(t_in(locale, "message.invalid_email"))
            }
            other => ApiError::ExportFailed(other.to_string()),
        }
    }
}

// ==========================================
// 默认 (英文) 转换
// ==========================================
impl From<InputError> for ApiError {
    fn from(err: InputError) -> Self {
        ApiError::from_input_error(err, crate::i18n::DEFAULT_LOCALE)
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        ApiError::from_export_error(err, crate::i18n::DEFAULT_LOCALE)
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
