// ==========================================
// 产能利用率计算器 - CSV / JSON 导出
// ==========================================

use crate::export::document::ReportDocument;
use crate::export::error::{ExportError, ExportResult};
use std::path::{Path, PathBuf};

/// 生成 CSV 文本 (metric,value 两列)
pub fn render_csv(doc: &ReportDocument) -> ExportResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["metric", "value"])?;

    let mut rows: Vec<(String, String)> = vec![
        ("report_id".to_string(), doc.report_id.clone()),
        ("generated_on".to_string(), doc.generated_on.to_string()),
        ("company_name".to_string(), doc.company_name.clone()),
        ("max_capacity".to_string(), doc.max_capacity.to_string()),
        ("actual_production".to_string(), doc.actual_production.to_string()),
        ("utilization_rate".to_string(), doc.utilization_rate.to_string()),
        ("unused_capacity".to_string(), doc.unused_capacity.to_string()),
    ];
    if let Some(revenue) = doc.potential_revenue {
        rows.push(("potential_revenue".to_string(), revenue.to_string()));
    }
    rows.push((
        "recommendation_tier".to_string(),
        doc.recommendation_tier.to_string(),
    ));
    for (i, rec) in doc.recommendations.iter().enumerate() {
        rows.push((format!("recommendation_{}", i + 1), rec.clone()));
    }

    for (metric, value) in &rows {
        writer.write_record([metric.as_str(), value.as_str()])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

/// 生成 JSON 文本
pub fn render_json(doc: &ReportDocument) -> ExportResult<String> {
    Ok(serde_json::to_string_pretty(doc)?)
}

/// 写出文本文件 (自动创建父目录)
pub fn write_text_file(path: impl AsRef<Path>, content: &str) -> ExportResult<PathBuf> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, content)?;
    tracing::info!(path = %path.display(), size = content.len(), "报告文件已写出");
    Ok(path.to_path_buf())
}
