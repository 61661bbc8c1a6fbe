// ==========================================
// 产能利用率计算器 - 导出层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 导出层错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    // ===== 输入错误 =====
    #[error("无效的邮箱地址: {0:?}")]
    InvalidEmail(String),

    // ===== 输出错误 =====
    #[error("文件写入失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV 生成失败: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON 序列化失败: {0}")]
    Json(#[from] serde_json::Error),

    #[error("文本编码错误: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

pub type ExportResult<T> = Result<T, ExportError>;
