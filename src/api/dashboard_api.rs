// ==========================================
// 产能利用率计算器 - 结果与洞察 API
// ==========================================
// 职责: 读取会话快照,输出图表数据与分析文案
// 架构: API 层 → Engine 层 (ChartBuilder / InsightClassifier)
// ==========================================

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::ReportSettings;
use crate::domain::session::{ReportData, SessionContext};
use crate::domain::types::UtilizationTier;
use crate::engine::chart::{ChartBuilder, ChartBundle, SERIES_COLOR};
use crate::engine::InsightClassifier;

// ==========================================
// InsightsResponse - 结果页数据
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsResponse {
    pub data: ReportData,
    pub has_snapshot: bool,

    // ===== 分级 =====
    pub tier: UtilizationTier,
    pub tier_label: String,
    pub tier_description: String,
    pub tier_color: String,

    // ===== 分析 =====
    pub analysis: String,
    pub potential_actions: Vec<String>,
    pub business_impact: Vec<String>,

    // ===== 图表 =====
    pub charts: ChartBundle,
    pub series_color: String,
}

// ==========================================
// DashboardApi - 结果与洞察 API
// ==========================================
pub struct DashboardApi {
    classifier: InsightClassifier,
    settings: Arc<ReportSettings>,
}

impl DashboardApi {
    pub fn new(settings: Arc<ReportSettings>) -> Self {
        Self {
            classifier: InsightClassifier::new(),
            settings,
        }
    }

    /// 结果页数据
    ///
    /// # 参数
    /// - ctx: 会话上下文 (无快照时使用默认值)
    /// - rng: 趋势图随机源
    pub fn insights<R: Rng>(&self, ctx: &SessionContext, rng: &mut R) -> InsightsResponse {
        let locale = self.settings.locale.as_str();
        let data = ctx.report_data(&self.settings.fallbacks);
        let rate = data.utilization_rate;
        let tier = self.classifier.classify(rate);

        let charts = ChartBuilder::new(locale).build(&data, &self.settings.benchmarks, rng);

        tracing::debug!(rate, tier = %tier, has_snapshot = ctx.has_snapshot(), "生成结果页数据");

        InsightsResponse {
            data,
            has_snapshot: ctx.has_snapshot(),
            tier,
            tier_label: self.classifier.label(tier, locale),
            tier_description: self.classifier.description(tier, locale),
            tier_color: tier.color().to_string(),
            analysis: self.classifier.analysis(rate, locale),
            potential_actions: self.classifier.potential_actions(rate, locale).to_vec(),
            business_impact: self.classifier.business_impact(locale).to_vec(),
            charts,
            series_color: SERIES_COLOR.to_string(),
        }
    }
}
