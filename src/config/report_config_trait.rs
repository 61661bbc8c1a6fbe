// ==========================================
// 产能利用率计算器 - 报告配置读取 Trait
// ==========================================
// 职责: 定义图表/导出模块所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::domain::session::SnapshotFallbacks;
use crate::engine::chart::IndustryBenchmarks;
use async_trait::async_trait;
use std::error::Error;
use std::path::PathBuf;

// ==========================================
// ReportConfigReader Trait
// ==========================================
// 实现者: ConfigManager
#[async_trait]
pub trait ReportConfigReader: Send + Sync {
    // ===== 展示配置 =====

    /// 获取报告语言
    ///
    /// # 默认值
    /// - en
    async fn get_locale(&self) -> Result<String, Box<dyn Error + Send + Sync>>;

    /// 获取货币符号
    ///
    /// # 默认值
    /// - ₹
    async fn get_currency_symbol(&self) -> Result<String, Box<dyn Error + Send + Sync>>;

    /// 获取报告中的公司名称
    ///
    /// # 默认值
    /// - Your Company Name
    async fn get_company_name(&self) -> Result<String, Box<dyn Error + Send + Sync>>;

    // ===== 数据缺省配置 =====

    /// 获取会话快照缺失时的默认值
    ///
    /// # 默认值
    /// - 1000 / 700 / 70
    async fn get_snapshot_fallbacks(
        &self,
    ) -> Result<SnapshotFallbacks, Box<dyn Error + Send + Sync>>;

    /// 获取行业对比基准
    ///
    /// # 默认值
    /// - 行业平均 75, 领先 90, 落后 60
    async fn get_industry_benchmarks(
        &self,
    ) -> Result<IndustryBenchmarks, Box<dyn Error + Send + Sync>>;

    // ===== 导出配置 =====

    /// 获取导出目录
    async fn get_export_dir(&self) -> Result<PathBuf, Box<dyn Error + Send + Sync>>;

    /// 获取模拟邮件发送延迟（毫秒）
    ///
    /// # 默认值
    /// - 0
    async fn get_mail_delay_ms(&self) -> Result<u64, Box<dyn Error + Send + Sync>>;
}
