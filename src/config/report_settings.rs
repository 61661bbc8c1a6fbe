// ==========================================
// 产能利用率计算器 - 报告设置快照
// ==========================================
// 职责: 启动时一次性读取配置,供 API 层同步使用
// ==========================================

use crate::config::report_config_trait::ReportConfigReader;
use crate::domain::session::SnapshotFallbacks;
use crate::engine::chart::IndustryBenchmarks;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSettings {
    pub locale: String,
    pub currency_symbol: String,
    pub company_name: String,
    pub fallbacks: SnapshotFallbacks,
    pub benchmarks: IndustryBenchmarks,
    pub export_dir: PathBuf,
    pub mail_delay: Duration,
}

impl ReportSettings {
    /// 从配置读取器加载
    pub async fn load(
        reader: &dyn ReportConfigReader,
    ) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let settings = Self {
            locale: reader.get_locale().await?,
            currency_symbol: reader.get_currency_symbol().await?,
            company_name: reader.get_company_name().await?,
            fallbacks: reader.get_snapshot_fallbacks().await?,
            benchmarks: reader.get_industry_benchmarks().await?,
            export_dir: reader.get_export_dir().await?,
            mail_delay: Duration::from_millis(reader.get_mail_delay_ms().await?),
        };

        tracing::debug!(
            locale = %settings.locale,
            export_dir = %settings.export_dir.display(),
            "报告设置加载完成"
        );
        Ok(settings)
    }
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            locale: crate::i18n::DEFAULT_LOCALE.to_string(),
            currency_symbol: "₹".to_string(),
            company_name: "Your Company Name".to_string(),
            fallbacks: SnapshotFallbacks::default(),
            benchmarks: IndustryBenchmarks::default(),
            export_dir: PathBuf::from("."),
            mail_delay: Duration::ZERO,
        }
    }
}
