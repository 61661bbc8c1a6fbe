// ==========================================
// 产能利用率计算器 - 计算 API
// ==========================================
// 职责: 计算 → 分级 → 写入会话快照
// 架构: API 层 → Engine 层 (UtilizationCalculator / InsightClassifier)
// 红线: 仅成功计算后写入快照; 失败时快照保持不变
// ==========================================

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::config::ReportSettings;
use crate::domain::capacity::{CapacityInput, UtilizationResult};
use crate::domain::session::SessionContext;
use crate::domain::types::{CardHints, RecommendationTier, UtilizationTier};
use crate::engine::{InsightClassifier, UtilizationCalculator};
use crate::i18n::t_in;

// ==========================================
// CalculationResponse - 计算响应
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResponse {
    pub input: CapacityInput,
    pub result: UtilizationResult,

    // ===== 分级 =====
    pub tier: UtilizationTier,
    pub tier_label: String,
    pub tier_description: String,
    pub tier_color: String,
    pub recommendation_tier: RecommendationTier,

    // ===== 卡片 =====
    pub card_hints: CardHints,

    /// 完成提示
    pub message: String,
}

// ==========================================
// CalculatorApi - 计算 API
// ==========================================
pub struct CalculatorApi {
    calculator: UtilizationCalculator,
    classifier: InsightClassifier,
    settings: Arc<ReportSettings>,
}

impl CalculatorApi {
    pub fn new(settings: Arc<ReportSettings>) -> Self {
        Self {
            calculator: UtilizationCalculator::new(),
            classifier: InsightClassifier::new(),
            settings,
        }
    }

    /// 执行一次计算
    ///
    /// # 参数
    /// - ctx: 会话上下文 (成功时覆盖快照)
    /// - input: 用户输入
    ///
    /// # 返回
    /// - Ok(CalculationResponse): 结果 + 分级 + 卡片提示
    /// - Err(ApiError::InvalidInput): 最大产能非正
    pub fn calculate(
        &self,
        ctx: &mut SessionContext,
        input: CapacityInput,
    ) -> ApiResult<CalculationResponse> {
        let locale = self.settings.locale.as_str();

        let result = self
            .calculator
            .compute(&input)
            .map_err(|e| ApiError::from_input_error(e, locale))?;

        let tier = self.classifier.classify(result.utilization_rate);
        let recommendation_tier = self.classifier.recommendation_tier(result.utilization_rate);

        ctx.record(input, result);

        tracing::info!(
            utilization_rate = result.utilization_rate,
            unused_capacity = result.unused_capacity,
            potential_revenue = ?result.potential_revenue,
            tier = %tier,
            "计算完成，快照已更新"
        );

        Ok(CalculationResponse {
            input,
            result,
            tier,
            tier_label: self.classifier.label(tier, locale),
            tier_description: self.classifier.description(tier, locale),
            tier_color: tier.color().to_string(),
            recommendation_tier,
            card_hints: self.classifier.card_hints(&result, locale),
            message: t_in(locale, "message.calculation_complete"),
        })
    }

    /// 重置 (清空快照)
    pub fn reset(&self, ctx: &mut SessionContext) {
        ctx.clear();
        tracing::info!("会话快照已清空");
    }
}
