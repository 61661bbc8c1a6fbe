// ==========================================
// 产能利用率计算器 - 配置层
// ==========================================
// 职责: 系统配置管理,支持文件/环境变量覆写
// 存储: JSON 对象文件
// ==========================================

pub mod config_manager;
pub mod report_config_trait;
pub mod report_settings;

// 重导出核心配置管理器
pub use config_manager::{config_keys, ConfigManager, ConfigResult, CONFIG_PATH_ENV, EXPORT_DIR_ENV};
pub use report_config_trait::ReportConfigReader;
pub use report_settings::ReportSettings;
