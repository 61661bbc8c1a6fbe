// ==========================================
// 产能利用率计算器 - 领域类型定义
// ==========================================
// 职责: 利用率分级、建议分级、收入影响等级
// 红线: 等级制,阈值边界下闭上开 (60 / 80 / 95)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 利用率等级 (Utilization Tier)
// ==========================================
// 顺序: Low < Moderate < Optimal < Maximum
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UtilizationTier {
    Low,      // < 60
    Moderate, // 60 <= r < 80
    Optimal,  // 80 <= r < 95
    Maximum,  // >= 95
}

impl UtilizationTier {
    /// 展示色 (卡片圆点/图例)
    pub fn color(&self) -> &'static str {
        match self {
            UtilizationTier::Low => "#e74c3c",
            UtilizationTier::Moderate => "#f39c12",
            UtilizationTier::Optimal => "#27ae60",
            UtilizationTier::Maximum => "#2980b9",
        }
    }

    /// 文案键前缀 (locales 中 tier.<key>.label / tier.<key>.description)
    pub fn i18n_key(&self) -> &'static str {
        match self {
            UtilizationTier::Low => "tier.low",
            UtilizationTier::Moderate => "tier.moderate",
            UtilizationTier::Optimal => "tier.optimal",
            UtilizationTier::Maximum => "tier.maximum",
        }
    }
}

impl fmt::Display for UtilizationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UtilizationTier::Low => write!(f, "LOW"),
            UtilizationTier::Moderate => write!(f, "MODERATE"),
            UtilizationTier::Optimal => write!(f, "OPTIMAL"),
            UtilizationTier::Maximum => write!(f, "MAXIMUM"),
        }
    }
}

// ==========================================
// 建议分级 (Recommendation Tier)
// ==========================================
// 用于导出报告,阈值独立于 UtilizationTier (边界相同)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationTier {
    MarketExpansion,  // < 60
    Scheduling,       // 60 <= r < 80
    Maintenance,      // 80 <= r < 95
    ExpansionPricing, // >= 95
}

impl RecommendationTier {
    pub fn i18n_key(&self) -> &'static str {
        match self {
            RecommendationTier::MarketExpansion => "recommendation.market_expansion",
            RecommendationTier::Scheduling => "recommendation.scheduling",
            RecommendationTier::Maintenance => "recommendation.maintenance",
            RecommendationTier::ExpansionPricing => "recommendation.expansion_pricing",
        }
    }
}

impl fmt::Display for RecommendationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecommendationTier::MarketExpansion => write!(f, "MARKET_EXPANSION"),
            RecommendationTier::Scheduling => write!(f, "SCHEDULING"),
            RecommendationTier::Maintenance => write!(f, "MAINTENANCE"),
            RecommendationTier::ExpansionPricing => write!(f, "EXPANSION_PRICING"),
        }
    }
}

// ==========================================
// 收入影响等级 (Revenue Impact)
// ==========================================
// > 100000 High, > 10000 Medium, 其余 Low
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RevenueImpact {
    Low,
    Medium,
    High,
}

impl RevenueImpact {
    pub fn i18n_key(&self) -> &'static str {
        match self {
            RevenueImpact::Low => "card.impact.low",
            RevenueImpact::Medium => "card.impact.medium",
            RevenueImpact::High => "card.impact.high",
        }
    }
}

impl fmt::Display for RevenueImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevenueImpact::Low => write!(f, "LOW"),
            RevenueImpact::Medium => write!(f, "MEDIUM"),
            RevenueImpact::High => write!(f, "HIGH"),
        }
    }
}

// ==========================================
// 结果卡片提示 (Card Hints)
// ==========================================
// 卡片下方的短说明,阈值 70 / 90 (与分级阈值无关)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardHints {
    pub utilization_hint: String,
    pub unused_hint: String,
    pub revenue_impact: Option<RevenueImpact>,
    pub revenue_impact_hint: Option<String>,
}
