// ==========================================
// 产能利用率计算器 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 输入校验错误
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum InputError {
    /// 最大产能 <= 0 (利用率无定义)
    #[error("最大产能必须大于零: max_capacity={max_capacity}")]
    NonPositiveCapacity { max_capacity: f64 },
}
