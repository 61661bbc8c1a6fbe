// ==========================================
// 产能利用率计算器 - 图表数据构建
// ==========================================
// 职责: 产能构成 (饼图)、行业对比 (柱状图)、利用率趋势 (折线图)
// 输入: ReportData + 行业基准 + 随机源
// 输出: ChartBundle (可序列化,交由前端渲染)
// 注意: 趋势数据为模拟数据,不做历史存储
// ==========================================

use crate::domain::session::ReportData;
use crate::i18n::t_in;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// 已用/闲置产能配色
pub const BREAKDOWN_COLORS: [&str; 2] = ["#245e4f", "#7ac9a7"];

/// 柱状图/折线图主色
pub const SERIES_COLOR: &str = "#245e4f";

// ==========================================
// 图表数据结构
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarPoint {
    pub name: String,
    pub utilization: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub month: String,
    pub utilization: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBundle {
    pub breakdown: Vec<PieSlice>,
    pub industry: Vec<BarPoint>,
    pub trend: Vec<TrendPoint>,
}

// ==========================================
// IndustryBenchmarks - 行业基准
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndustryBenchmarks {
    pub industry_average: f64,
    pub top_performers: f64,
    pub low_performers: f64,
}

impl Default for IndustryBenchmarks {
    fn default() -> Self {
        Self {
            industry_average: 75.0,
            top_performers: 90.0,
            low_performers: 60.0,
        }
    }
}

// 趋势月份与偏移: (月份键, 符号, 最大幅度)
const TREND_SHAPE: [(&str, f64, f64); 6] = [
    ("chart.month.jan", -1.0, 10.0),
    ("chart.month.feb", -1.0, 5.0),
    ("chart.month.mar", -1.0, 2.0),
    ("chart.month.apr", 0.0, 0.0),
    ("chart.month.may", 1.0, 3.0),
    ("chart.month.jun", 1.0, 5.0),
];

// ==========================================
// ChartBuilder - 图表数据构建器
// ==========================================
#[derive(Debug, Clone)]
pub struct ChartBuilder {
    locale: String,
}

impl ChartBuilder {
    pub fn new(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
        }
    }

    /// 产能构成
    pub fn breakdown(&self, data: &ReportData) -> Vec<PieSlice> {
        vec![
            PieSlice {
                name: t_in(&self.locale, "chart.utilized"),
                value: data.actual_production,
                color: BREAKDOWN_COLORS[0].to_string(),
            },
            PieSlice {
                name: t_in(&self.locale, "chart.unused"),
                value: data.unused_capacity(),
                color: BREAKDOWN_COLORS[1].to_string(),
            },
        ]
    }

    /// 行业对比
    pub fn industry_comparison(
        &self,
        data: &ReportData,
        benchmarks: &IndustryBenchmarks,
    ) -> Vec<BarPoint> {
        [
            ("chart.your_company", data.utilization_rate),
            ("chart.industry_avg", benchmarks.industry_average),
            ("chart.top_performers", benchmarks.top_performers),
            ("chart.low_performers", benchmarks.low_performers),
        ]
        .into_iter()
        .map(|(key, utilization)| BarPoint {
            name: t_in(&self.locale, key),
            utilization,
        })
        .collect()
    }

    /// 利用率趋势 (模拟 6 个月)
    ///
    /// 以当前利用率为 4 月基准,前三个月随机向下、后两个月随机向上
    pub fn trend<R: Rng>(&self, data: &ReportData, rng: &mut R) -> Vec<TrendPoint> {
        TREND_SHAPE
            .iter()
            .map(|&(key, sign, amplitude)| {
                let offset = if amplitude > 0.0 {
                    sign * rng.gen::<f64>() * amplitude
                } else {
                    0.0
                };
                TrendPoint {
                    month: t_in(&self.locale, key),
                    utilization: data.utilization_rate + offset,
                }
            })
            .collect()
    }

    pub fn build<R: Rng>(
        &self,
        data: &ReportData,
        benchmarks: &IndustryBenchmarks,
        rng: &mut R,
    ) -> ChartBundle {
        ChartBundle {
            breakdown: self.breakdown(data),
            industry: self.industry_comparison(data, benchmarks),
            trend: self.trend(data, rng),
        }
    }
}
