// ==========================================
// 产能利用率计算器 - 导出层
// ==========================================
// 职责: 文本 (剪贴板)、PDF、CSV、JSON、邮件 (模拟)
// 红线: 只读会话快照,不改写计算结果
// ==========================================

pub mod document;
pub mod error;
pub mod format;
pub mod mailer;
pub mod pdf;
pub mod tabular;
pub mod text_report;

// 重导出
pub use document::{ReportDocument, DEFAULT_CSV_FILE_NAME, DEFAULT_PDF_FILE_NAME};
pub use error::{ExportError, ExportResult};
pub use format::{format_en_in, format_rate, format_report_date};
pub use mailer::{validate_email, DeliveryReceipt, ReportMailer, SimulatedMailer};
pub use pdf::{render_pdf, write_pdf};
pub use tabular::{render_csv, render_json, write_text_file};
pub use text_report::render_text_report;
