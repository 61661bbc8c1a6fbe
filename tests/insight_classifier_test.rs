// ==========================================
// InsightClassifier 引擎集成测试
// ==========================================
// 测试目标: 验证利用率分级、建议列表、结果卡片提示
// 覆盖范围: LOW/MODERATE/OPTIMAL/MAXIMUM 四级边界, 中英文文案
// ==========================================

use capacity_compass::{
    InsightClassifier, RecommendationTier, RevenueImpact, UtilizationResult, UtilizationTier,
};

// ==========================================
// 分级边界
// ==========================================

#[test]
fn test_classify_boundaries() {
    let classifier = InsightClassifier::new();

    let cases = [
        (0.0, UtilizationTier::Low),
        (59.99, UtilizationTier::Low),
        (60.0, UtilizationTier::Moderate),
        (79.99, UtilizationTier::Moderate),
        (80.0, UtilizationTier::Optimal),
        (94.99, UtilizationTier::Optimal),
        (95.0, UtilizationTier::Maximum),
        (150.0, UtilizationTier::Maximum),
    ];

    for (rate, expected) in cases {
        assert_eq!(classifier.classify(rate), expected, "rate={}", rate);
    }
}

#[test]
fn test_recommendation_tier_boundaries() {
    let classifier = InsightClassifier::new();

    assert_eq!(
        classifier.recommendation_tier(59.99),
        RecommendationTier::MarketExpansion
    );
    assert_eq!(classifier.recommendation_tier(60.0), RecommendationTier::Scheduling);
    assert_eq!(classifier.recommendation_tier(80.0), RecommendationTier::Maintenance);
    assert_eq!(
        classifier.recommendation_tier(95.0),
        RecommendationTier::ExpansionPricing
    );
}

#[test]
fn test_tier_colors_and_labels() {
    let classifier = InsightClassifier::new();

    assert_eq!(UtilizationTier::Low.color(), "#e74c3c");
    assert_eq!(UtilizationTier::Moderate.color(), "#f39c12");
    assert_eq!(UtilizationTier::Optimal.color(), "#27ae60");
    assert_eq!(UtilizationTier::Maximum.color(), "#2980b9");

    assert_eq!(classifier.label(UtilizationTier::Moderate, "en"), "Moderate");
    assert_eq!(
        classifier.description(UtilizationTier::Moderate, "en"),
        "Room for improvement"
    );
}

// ==========================================
// 建议列表
// ==========================================

#[test]
fn test_recommendations_low_rate() {
    let classifier = InsightClassifier::new();
    let items = classifier.recommendations(45.0, "en");

    assert_eq!(
        items,
        [
            "Implement marketing campaigns to increase demand for your products".to_string(),
            "Explore new market segments to expand your customer base".to_string(),
            "Consider temporarily reducing capacity to align with current demand".to_string(),
        ]
    );
}

#[test]
fn test_recommendations_top_rate() {
    let classifier = InsightClassifier::new();
    let items = classifier.recommendations(97.0, "en");

    assert_eq!(items[0], "Consider capacity expansion to meet high demand");
    assert_eq!(
        items[2],
        "Review quality control processes to ensure standards are maintained at high production rates"
    );
}

#[test]
fn test_recommendations_translated() {
    let classifier = InsightClassifier::new();
    let en = classifier.recommendations(85.0, "en");
    let zh = classifier.recommendations(85.0, "zh-CN");

    assert_eq!(zh.len(), 3);
    assert_ne!(en, zh);
    assert!(zh.iter().all(|item| !item.is_empty()));
}

// ==========================================
// 结果卡片
// ==========================================

#[test]
fn test_card_hints_for_moderate_result() {
    let classifier = InsightClassifier::new();
    let result = UtilizationResult {
        utilization_rate: 70.0,
        unused_capacity: 300.0,
        potential_revenue: Some(15000.0),
    };

    let hints = classifier.card_hints(&result, "en");
    assert_eq!(hints.utilization_hint, "Optimal Range");
    assert_eq!(hints.unused_hint, "Moderate Buffer");
    assert_eq!(hints.revenue_impact, Some(RevenueImpact::Medium));
    assert_eq!(hints.revenue_impact_hint.as_deref(), Some("Medium Impact"));
}

#[test]
fn test_card_hints_without_revenue() {
    let classifier = InsightClassifier::new();
    let result = UtilizationResult {
        utilization_rate: 100.0,
        unused_capacity: 0.0,
        potential_revenue: None,
    };

    let hints = classifier.card_hints(&result, "en");
    assert_eq!(hints.utilization_hint, "Near Maximum");
    assert_eq!(hints.unused_hint, "Minimal Slack");
    assert_eq!(hints.revenue_impact, None);
    assert_eq!(hints.revenue_impact_hint, None);
}

#[test]
fn test_revenue_impact_thresholds() {
    let classifier = InsightClassifier::new();

    assert_eq!(classifier.revenue_impact(100_000.01), RevenueImpact::High);
    assert_eq!(classifier.revenue_impact(100_000.0), RevenueImpact::Medium);
    assert_eq!(classifier.revenue_impact(10_000.0), RevenueImpact::Low);
    assert_eq!(classifier.revenue_impact(-500.0), RevenueImpact::Low);
}

// ==========================================
// 结果页文案
// ==========================================

#[test]
fn test_analysis_sentence_for_low_rate() {
    let classifier = InsightClassifier::new();

    assert_eq!(
        classifier.analysis(45.5, "en"),
        "Your current capacity utilization is 45.5%, which indicates significant room for improvement."
    );
}

#[test]
fn test_analysis_sentence_per_tier_boundary() {
    let classifier = InsightClassifier::new();
    let prefix = "Your current capacity utilization is";

    let cases = [
        (59.99, "60.0%, which indicates significant room for improvement."),
        (
            60.0,
            "60.0%, which indicates a moderate utilization level with opportunity for growth.",
        ),
        (
            79.99,
            "80.0%, which indicates a moderate utilization level with opportunity for growth.",
        ),
        (
            80.0,
            "80.0%, which indicates healthy utilization with some flexibility for unexpected demand.",
        ),
        (
            94.99,
            "95.0%, which indicates healthy utilization with some flexibility for unexpected demand.",
        ),
        (
            95.0,
            "95.0%, which indicates you are operating near maximum capacity and may need expansion.",
        ),
    ];

    for (rate, tail) in cases {
        assert_eq!(
            classifier.analysis(rate, "en"),
            format!("{} {}", prefix, tail),
            "rate={}",
            rate
        );
    }
}

#[test]
fn test_business_impact_is_rate_independent() {
    let classifier = InsightClassifier::new();
    let impact = classifier.business_impact("en");

    assert_eq!(
        impact[0],
        "Increasing utilization by just 5% could significantly improve profitability"
    );
}
