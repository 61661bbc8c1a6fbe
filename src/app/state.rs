// ==========================================
// 产能利用率计算器 - 应用状态管理
// ==========================================
// 职责: 组装配置与各 API 实例
// 注意: 会话上下文不在此持有,由调用方显式创建并传递
// ==========================================

use std::path::PathBuf;
use std::sync::Arc;

use crate::api::{CalculatorApi, DashboardApi, ReportApi};
use crate::config::{ConfigManager, ReportSettings, EXPORT_DIR_ENV};
use crate::export::{ReportMailer, SimulatedMailer};

/// 应用状态
///
/// 包含所有API实例和共享配置
pub struct AppState {
    /// 配置管理器
    pub config: Arc<ConfigManager>,

    /// 启动时读取的报告设置
    pub settings: Arc<ReportSettings>,

    /// 计算API
    pub calculator_api: Arc<CalculatorApi>,

    /// 结果与洞察API
    pub dashboard_api: Arc<DashboardApi>,

    /// 报告导出API
    pub report_api: Arc<ReportApi>,
}

impl AppState {
    /// 创建新的AppState实例 (模拟邮件投递)
    ///
    /// # 返回
    /// - Ok(AppState): 应用状态实例
    /// - Err(String): 初始化错误
    pub async fn new(config: ConfigManager) -> Result<Self, String> {
        let config = Arc::new(config);
        let settings = ReportSettings::load(config.as_ref())
            .await
            .map_err(|e| format!("读取报告设置失败: {}", e))?;
        let mailer: Arc<dyn ReportMailer> =
            Arc::new(SimulatedMailer::with_delay(settings.mail_delay));

        Ok(Self::with_mailer(config, settings, mailer))
    }

    /// 使用指定投递实现创建
    pub fn with_mailer(
        config: Arc<ConfigManager>,
        settings: ReportSettings,
        mailer: Arc<dyn ReportMailer>,
    ) -> Self {
        tracing::info!(locale = %settings.locale, "初始化AppState");

        let settings = Arc::new(settings);
        Self {
            config,
            calculator_api: Arc::new(CalculatorApi::new(settings.clone())),
            dashboard_api: Arc::new(DashboardApi::new(settings.clone())),
            report_api: Arc::new(ReportApi::new(settings.clone(), mailer)),
            settings,
        }
    }
}

// ==========================================
// 辅助函数
// ==========================================

/// 获取默认导出目录
///
/// # 返回
/// - CAPACITY_COMPASS_EXPORT_DIR (若设置)
/// - 用户文档目录/capacity-compass
/// - 当前目录 (无法获取用户目录时)
pub fn get_default_export_dir() -> PathBuf {
    if let Ok(path) = std::env::var(EXPORT_DIR_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    match dirs::document_dir() {
        Some(dir) => dir.join("capacity-compass"),
        None => PathBuf::from("."),
    }
}
