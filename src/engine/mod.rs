// ==========================================
// 产能利用率计算器 - 引擎层
// ==========================================
// 职责: 利用率计算、洞察分级、图表数据构建
// 红线: 引擎无状态,不做 I/O
// ==========================================

pub mod chart;
pub mod error;
pub mod insight;
pub mod utilization;

// 重导出核心引擎
pub use chart::{BarPoint, ChartBuilder, ChartBundle, IndustryBenchmarks, PieSlice, TrendPoint};
pub use error::InputError;
pub use insight::InsightClassifier;
pub use utilization::{round2, UtilizationCalculator};
