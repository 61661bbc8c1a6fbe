// ==========================================
// 产能利用率计算器 - 核心库
// ==========================================
// 输入: 最大产能、实际产量、单位收入
// 输出: 利用率、闲置产能、损失收入、分级与建议、图表与报告
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 值对象与会话上下文
pub mod domain;

// 引擎层 - 计算与分级
pub mod engine;

// 导出层 - 文本/PDF/CSV/JSON/邮件
pub mod export;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - 组装
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    CalculationRecord, CapacityInput, CardHints, RecommendationTier, ReportData, RevenueImpact,
    SessionContext, SnapshotFallbacks, UtilizationResult, UtilizationTier,
};

// 引擎
pub use engine::{ChartBuilder, InputError, InsightClassifier, UtilizationCalculator};

// API
pub use api::{ApiError, ApiResult, CalculatorApi, DashboardApi, ReportApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Capacity Compass Calculator Pro";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
