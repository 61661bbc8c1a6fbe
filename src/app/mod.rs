// ==========================================
// 产能利用率计算器 - 应用层
// ==========================================
// 职责: 组装配置与 API,供命令行入口使用
// ==========================================

pub mod state;

// 重导出
pub use state::{get_default_export_dir, AppState};
