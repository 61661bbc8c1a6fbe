// ==========================================
// 产能利用率计算器 - 洞察分级引擎
// ==========================================
// 职责: 利用率 → 等级 (标签/说明/颜色) 与建议列表
// 输入: 利用率 (%)
// 输出: UtilizationTier / RecommendationTier / 文案
// 红线: 阈值下闭上开,报告文案依赖分桶结果,不得改动
// ==========================================

use crate::domain::capacity::UtilizationResult;
use crate::domain::types::{CardHints, RecommendationTier, RevenueImpact, UtilizationTier};
use crate::i18n::{items_in, t_in, t_with_args_in};

// ==========================================
// 阈值常量
// ==========================================
pub const MODERATE_THRESHOLD: f64 = 60.0;
pub const OPTIMAL_THRESHOLD: f64 = 80.0;
pub const MAXIMUM_THRESHOLD: f64 = 95.0;

// 结果卡片提示阈值
const CARD_OPTIMAL_FROM: f64 = 70.0;
const CARD_NEAR_MAX_FROM: f64 = 90.0;

// 收入影响阈值
const HIGH_IMPACT_ABOVE: f64 = 100_000.0;
const MEDIUM_IMPACT_ABOVE: f64 = 10_000.0;

// ==========================================
// InsightClassifier - 洞察分级引擎
// ==========================================
// 无状态,所有方法纯函数; NaN 落入最高档
#[derive(Debug, Default, Clone, Copy)]
pub struct InsightClassifier;

impl InsightClassifier {
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // 分级
    // ==========================================

    /// 利用率等级 (展示用)
    pub fn classify(&self, rate: f64) -> UtilizationTier {
        if rate < MODERATE_THRESHOLD {
            UtilizationTier::Low
        } else if rate < OPTIMAL_THRESHOLD {
            UtilizationTier::Moderate
        } else if rate < MAXIMUM_THRESHOLD {
            UtilizationTier::Optimal
        } else {
            UtilizationTier::Maximum
        }
    }

    /// 建议等级 (导出报告用,阈值独立维护)
    pub fn recommendation_tier(&self, rate: f64) -> RecommendationTier {
        if rate < 60.0 {
            RecommendationTier::MarketExpansion
        } else if rate < 80.0 {
            RecommendationTier::Scheduling
        } else if rate < 95.0 {
            RecommendationTier::Maintenance
        } else {
            RecommendationTier::ExpansionPricing
        }
    }

    // ==========================================
    // 文案
    // ==========================================

    pub fn label(&self, tier: UtilizationTier, locale: &str) -> String {
        t_in(locale, &format!("{}.label", tier.i18n_key()))
    }

    pub fn description(&self, tier: UtilizationTier, locale: &str) -> String {
        t_in(locale, &format!("{}.description", tier.i18n_key()))
    }

    /// 报告建议 (固定三条)
    pub fn recommendations(&self, rate: f64, locale: &str) -> [String; 3] {
        items_in(locale, self.recommendation_tier(rate).i18n_key())
    }

    /// 分析结论句
    ///
    /// # 示例
    /// "Your current capacity utilization is 70.0%, which indicates a moderate ..."
    pub fn analysis(&self, rate: f64, locale: &str) -> String {
        let assessment_key = match self.classify(rate) {
            UtilizationTier::Low => "analysis.low",
            UtilizationTier::Moderate => "analysis.moderate",
            UtilizationTier::Optimal => "analysis.optimal",
            UtilizationTier::Maximum => "analysis.maximum",
        };
        let rate_text = format!("{:.1}", rate);
        let assessment = t_in(locale, assessment_key);

        t_with_args_in(
            locale,
            "analysis.summary",
            &[("rate", &rate_text), ("assessment", &assessment)],
        )
    }

    /// 可采取的行动 (以 80 为界: 需求侧 / 效率侧)
    pub fn potential_actions(&self, rate: f64, locale: &str) -> [String; 3] {
        if rate < OPTIMAL_THRESHOLD {
            items_in(locale, "actions.demand")
        } else {
            items_in(locale, "actions.efficiency")
        }
    }

    /// 业务影响说明 (与利用率无关)
    pub fn business_impact(&self, locale: &str) -> [String; 3] {
        items_in(locale, "impact")
    }

    // ==========================================
    // 结果卡片
    // ==========================================

    pub fn revenue_impact(&self, potential_revenue: f64) -> RevenueImpact {
        if potential_revenue > HIGH_IMPACT_ABOVE {
            RevenueImpact::High
        } else if potential_revenue > MEDIUM_IMPACT_ABOVE {
            RevenueImpact::Medium
        } else {
            RevenueImpact::Low
        }
    }

    /// 结果卡片提示
    pub fn card_hints(&self, result: &UtilizationResult, locale: &str) -> CardHints {
        let rate = result.utilization_rate;
        let (utilization_key, unused_key) = if rate < CARD_OPTIMAL_FROM {
            ("card.utilization.below_optimal", "card.unused.significant")
        } else if rate < CARD_NEAR_MAX_FROM {
            ("card.utilization.optimal_range", "card.unused.moderate")
        } else {
            ("card.utilization.near_maximum", "card.unused.minimal")
        };

        let revenue_impact = result.potential_revenue.map(|v| self.revenue_impact(v));

        CardHints {
            utilization_hint: t_in(locale, utilization_key),
            unused_hint: t_in(locale, unused_key),
            revenue_impact,
            revenue_impact_hint: revenue_impact.map(|impact| t_in(locale, impact.i18n_key())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_rate_lands_in_top_bucket() {
        let classifier = InsightClassifier::new();
        assert_eq!(classifier.classify(f64::NAN), UtilizationTier::Maximum);
        assert_eq!(
            classifier.recommendation_tier(f64::NAN),
            RecommendationTier::ExpansionPricing
        );
    }

    #[test]
    fn test_negative_rate_is_low() {
        let classifier = InsightClassifier::new();
        assert_eq!(classifier.classify(-15.0), UtilizationTier::Low);
    }

    #[test]
    fn test_analysis_sentence() {
        let classifier = InsightClassifier::new();
        assert_eq!(
            classifier.analysis(97.0, "en"),
            "Your current capacity utilization is 97.0%, which indicates you are operating near maximum capacity and may need expansion."
        );
    }

    #[test]
    fn test_potential_actions_split_at_80() {
        let classifier = InsightClassifier::new();
        assert_eq!(
            classifier.potential_actions(79.99, "en")[0],
            "Consider marketing initiatives to increase demand"
        );
        assert_eq!(
            classifier.potential_actions(80.0, "en")[0],
            "Optimize production processes to increase efficiency"
        );
    }

    #[test]
    fn test_revenue_impact_buckets() {
        let classifier = InsightClassifier::new();
        assert_eq!(classifier.revenue_impact(100_000.0), RevenueImpact::Medium);
        assert_eq!(classifier.revenue_impact(100_000.01), RevenueImpact::High);
        assert_eq!(classifier.revenue_impact(10_000.0), RevenueImpact::Low);
        assert_eq!(classifier.revenue_impact(-500.0), RevenueImpact::Low);
    }
}
