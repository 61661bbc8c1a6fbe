// ==========================================
// 产能利用率计算器 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供命令行/前端调用
// ==========================================

pub mod calculator_api;
pub mod dashboard_api;
pub mod error;
pub mod report_api;

// 重导出核心类型
pub use calculator_api::{CalculationResponse, CalculatorApi};
pub use dashboard_api::{DashboardApi, InsightsResponse};
pub use error::{ApiError, ApiResult};
pub use report_api::ReportApi;
