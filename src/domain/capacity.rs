// ==========================================
// 产能利用率计算器 - 产能输入与结果领域模型
// ==========================================
// 职责: 定义计算输入、计算结果、会话快照所需的值对象
// 红线: 值对象一经计算不可变,不含计算逻辑
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// CapacityInput - 产能输入
// ==========================================
// 注意: actual_production 不强制 <= max_capacity,超出时利用率 > 100%
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapacityInput {
    pub max_capacity: f64,      // 最大产能 (单位)
    pub actual_production: f64, // 实际产量 (单位)
    pub revenue_per_unit: f64,  // 单位收入
}

impl CapacityInput {
    pub fn new(max_capacity: f64, actual_production: f64, revenue_per_unit: f64) -> Self {
        Self {
            max_capacity,
            actual_production,
            revenue_per_unit,
        }
    }
}

// ==========================================
// UtilizationResult - 利用率计算结果
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtilizationResult {
    pub utilization_rate: f64,          // 利用率 (%),保留2位小数
    pub unused_capacity: f64,           // 闲置产能,可为负
    pub potential_revenue: Option<f64>, // 损失收入 (仅 revenue_per_unit > 0 时存在)
}

// ==========================================
// CalculationRecord - 最近一次成功计算
// ==========================================
// 用途: 会话快照,供图表与导出读取
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub input: CapacityInput,
    pub result: UtilizationResult,
    pub calculated_at: DateTime<Utc>,
}

impl CalculationRecord {
    pub fn new(input: CapacityInput, result: UtilizationResult) -> Self {
        Self {
            input,
            result,
            calculated_at: Utc::now(),
        }
    }
}
