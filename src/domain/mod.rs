// ==========================================
// 产能利用率计算器 - 领域模型层
// ==========================================
// 职责: 定义值对象、分级类型、会话上下文
// 红线: 不含计算逻辑,不含导出逻辑
// ==========================================

pub mod capacity;
pub mod session;
pub mod types;

// 重导出核心类型
pub use capacity::{CalculationRecord, CapacityInput, UtilizationResult};
pub use session::{snapshot_keys, ReportData, SessionContext, SnapshotFallbacks};
pub use types::{CardHints, RecommendationTier, RevenueImpact, UtilizationTier};
