// ==========================================
// 产能利用率计算器 - 利用率计算引擎
// ==========================================
// 职责: 三个输入 → 利用率、闲置产能、损失收入
// 输入: CapacityInput
// 输出: UtilizationResult
// 红线: 仅拒绝 max_capacity <= 0; 负数与超产均放行
// ==========================================

use crate::domain::capacity::{CapacityInput, UtilizationResult};
use crate::engine::error::InputError;

/// 保留2位小数 (四舍五入,远离零)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ==========================================
// UtilizationCalculator - 利用率计算引擎
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct UtilizationCalculator;

impl UtilizationCalculator {
    pub fn new() -> Self {
        Self
    }

    /// 计算利用率
    ///
    /// # 参数
    /// - `input`: 最大产能、实际产量、单位收入
    ///
    /// # 返回
    /// - Ok(UtilizationResult): 各项保留2位小数
    /// - Err(InputError::NonPositiveCapacity): max_capacity <= 0 或 NaN
    ///
    /// # 规则
    /// - utilization_rate = actual / max × 100
    /// - unused_capacity = max − actual (可为负)
    /// - potential_revenue = 未取整的闲置产能 × 单位收入,仅单位收入 > 0 时计算
    pub fn compute(&self, input: &CapacityInput) -> Result<UtilizationResult, InputError> {
        if input.max_capacity.is_nan() || input.max_capacity <= 0.0 {
            return Err(InputError::NonPositiveCapacity {
                max_capacity: input.max_capacity,
            });
        }

        let rate = input.actual_production / input.max_capacity * 100.0;
        let unused = input.max_capacity - input.actual_production;

        let potential_revenue = if input.revenue_per_unit > 0.0 {
            Some(round2(unused * input.revenue_per_unit))
        } else {
            None
        };

        tracing::debug!(
            max_capacity = input.max_capacity,
            actual_production = input.actual_production,
            rate,
            unused,
            "利用率计算完成"
        );

        Ok(UtilizationResult {
            utilization_rate: round2(rate),
            unused_capacity: round2(unused),
            potential_revenue,
        })
    }
}
