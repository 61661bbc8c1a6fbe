// ==========================================
// 产能利用率计算器 - 纯文本报告 (剪贴板)
// ==========================================
// 职责: 生成可直接粘贴的文本报告
// 注意: 剪贴板写入由调用方完成,这里只产出文本
// ==========================================

use crate::export::document::ReportDocument;
use crate::export::format::{format_en_in, format_rate, format_report_date};
use crate::i18n::t_in;

// 标题下一行固定为 6 个空格
const TITLE_SPACER: &str = "      ";

/// 生成纯文本报告
pub fn render_text_report(doc: &ReportDocument) -> String {
    let locale = doc.locale.as_str();
    let units = t_in(locale, "report.units");

    let mut lines = vec![
        t_in(locale, "report.title"),
        TITLE_SPACER.to_string(),
        format!(
            "{}: {}",
            t_in(locale, "report.date"),
            format_report_date(doc.generated_on)
        ),
        String::new(),
        t_in(locale, "report.analysis_results"),
        format!(
            "- {}: {} {}",
            t_in(locale, "report.max_capacity"),
            format_en_in(doc.max_capacity),
            units
        ),
        format!(
            "- {}: {} {}",
            t_in(locale, "report.actual_production"),
            format_en_in(doc.actual_production),
            units
        ),
        format!(
            "- {}: {}%",
            t_in(locale, "report.utilization_rate"),
            format_rate(doc.utilization_rate)
        ),
        format!(
            "- {}: {} {}",
            t_in(locale, "report.unused_capacity"),
            format_en_in(doc.unused_capacity),
            units
        ),
        String::new(),
        t_in(locale, "report.recommendations"),
    ];

    lines.extend(doc.recommendations.iter().map(|r| format!("• {}", r)));
    lines.push(String::new());
    lines.push(t_in(locale, "report.generated_by"));
    lines.push(t_in(locale, "report.website"));

    lines.join("\n")
}
