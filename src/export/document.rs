// ==========================================
// 产能利用率计算器 - 报告文档
// ==========================================
// 职责: 汇总快照数据与建议,作为各导出格式的统一输入
// ==========================================

use crate::domain::session::ReportData;
use crate::domain::types::RecommendationTier;
use crate::engine::insight::InsightClassifier;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 默认 PDF 文件名
pub const DEFAULT_PDF_FILE_NAME: &str = "capacity_utilization_report.pdf";

/// 默认 CSV 文件名
pub const DEFAULT_CSV_FILE_NAME: &str = "capacity_utilization_report.csv";

// ==========================================
// ReportDocument - 报告文档
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    pub report_id: String,
    pub generated_on: NaiveDate,
    pub locale: String,
    pub company_name: String,

    // ===== 分析数据 =====
    pub max_capacity: f64,
    pub actual_production: f64,
    pub utilization_rate: f64,
    pub unused_capacity: f64,
    pub potential_revenue: Option<f64>,

    // ===== 建议 =====
    pub recommendation_tier: RecommendationTier,
    pub recommendations: Vec<String>,
}

impl ReportDocument {
    /// 构建报告文档
    ///
    /// # 参数
    /// - `data`: 快照视图 (已应用默认值)
    /// - `potential_revenue`: 最近一次计算的损失收入 (若有)
    /// - `locale`: 文案语言
    /// - `company_name`: 报告公司名称
    /// - `generated_on`: 报告日期
    pub fn build(
        data: &ReportData,
        potential_revenue: Option<f64>,
        locale: &str,
        company_name: &str,
        generated_on: NaiveDate,
    ) -> Self {
        let classifier = InsightClassifier::new();
        let rate = data.utilization_rate;

        Self {
            report_id: Uuid::new_v4().to_string(),
            generated_on,
            locale: locale.to_string(),
            company_name: company_name.to_string(),
            max_capacity: data.max_capacity,
            actual_production: data.actual_production,
            utilization_rate: rate,
            unused_capacity: data.unused_capacity(),
            potential_revenue,
            recommendation_tier: classifier.recommendation_tier(rate),
            recommendations: classifier.recommendations(rate, locale).to_vec(),
        }
    }
}
