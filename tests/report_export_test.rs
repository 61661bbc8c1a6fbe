// ==========================================
// ReportApi 导出集成测试
// ==========================================
// 测试目标: 验证文本/PDF/CSV/JSON 导出与模拟邮件
// 覆盖范围: 有快照、无快照 (默认值)、无效邮箱
// ==========================================


use capacity_compass::export::{render_pdf, DEFAULT_CSV_FILE_NAME, DEFAULT_PDF_FILE_NAME};
use capacity_compass::{ApiError, RecommendationTier, SessionContext};
use chrono::NaiveDate;
use test_helpers::{create_session_after, create_test_apis, create_test_settings};

fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 5).unwrap()
}

// ==========================================
// 文本报告
// ==========================================

#[test]
fn test_text_report_uses_last_calculation() {
    let (_dir, settings) = create_test_settings("en");
    let (calculator, _, report) = create_test_apis(settings);
    let ctx = create_session_after(&calculator, 1250000.0, 1000000.0, 0.0);

    let text = report.text_report_on(&ctx, report_date());

    assert!(text.starts_with("CAPACITY UTILIZATION REPORT\n      \nDate: 5/3/2026\n"));
    assert!(text.contains("- Maximum Production Capacity: 12,50,000 units"));
    assert!(text.contains("- Actual Production: 10,00,000 units"));
    assert!(text.contains("- Capacity Utilization Rate: 80.0%"));
    assert!(text.contains("- Unused Capacity: 2,50,000 units"));
    let first_item = "• Maintain current operations while monitoring for potential bottlenecks";
    assert!(text.contains(first_item));
    let footer = "Generated by Capacity Compass Calculator Pro\nwww.capacitycompass.com";
    assert!(text.ends_with(footer));
}

#[test]
fn test_text_report_without_snapshot_uses_fallbacks() {
    let (_dir, settings) = create_test_settings("en");
    let (_, _, report) = create_test_apis(settings);
    let ctx = SessionContext::new();

    let text = report.text_report_on(&ctx, report_date());

    assert!(text.contains("- Maximum Production Capacity: 1,000 units"));
    assert!(text.contains("- Actual Production: 700 units"));
    assert!(text.contains("- Capacity Utilization Rate: 70.0%"));
    assert!(text.contains("- Unused Capacity: 300 units"));
    assert!(text.contains("• Fine-tune production scheduling to improve resource allocation"));
}

#[test]
fn test_text_report_in_chinese() {
    let (_dir, settings) = create_test_settings("zh-CN");
    let (calculator, _, report) = create_test_apis(settings);
    let ctx = create_session_after(&calculator, 1000.0, 300.0, 0.0);

    let text = report.text_report_on(&ctx, report_date());

    assert!(!text.starts_with("CAPACITY UTILIZATION REPORT"));
    assert!(text.contains("30.0%"));
    assert_eq!(text.lines().filter(|l| l.starts_with("• ")).count(), 3);
}

#[test]
fn test_report_document_fields() {
    let (_dir, settings) = create_test_settings("en");
    let (calculator, _, report) = create_test_apis(settings);
    let ctx = create_session_after(&calculator, 1000.0, 970.0, 20.0);

    let doc = report.report_document(&ctx, report_date());

    assert_eq!(doc.company_name, "Acme Manufacturing");
    assert_eq!(doc.utilization_rate, 97.0);
    assert_eq!(doc.unused_capacity, 30.0);
    assert_eq!(doc.potential_revenue, Some(600.0));
    assert_eq!(doc.recommendation_tier, RecommendationTier::ExpansionPricing);
    assert_eq!(doc.recommendations.len(), 3);
    assert!(!doc.report_id.is_empty());
}

// ==========================================
// 文件导出
// ==========================================

#[test]
fn test_export_pdf_to_default_path() {
    let (dir, settings) = create_test_settings("en");
    let (calculator, _, report) = create_test_apis(settings);
    let ctx = create_session_after(&calculator, 1000.0, 700.0, 50.0);

    let path = report.export_pdf(&ctx, None).unwrap();

    assert_eq!(path, dir.path().join(DEFAULT_PDF_FILE_NAME));
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF-1.4"));
    let tail = String::from_utf8_lossy(&bytes[bytes.len() - 8..]).to_string();
    assert!(tail.contains("%%EOF"));
}

#[test]
fn test_pdf_is_english_for_chinese_locale() {
    let (_dir, settings) = create_test_settings("zh-CN");
    let (calculator, _, report) = create_test_apis(settings);
    let ctx = create_session_after(&calculator, 1000.0, 700.0, 0.0);

    let doc = report.report_document(&ctx, report_date());
    let bytes = render_pdf(&doc);
    let content = String::from_utf8_lossy(&bytes).to_string();

    assert!(content.contains("Capacity Utilization Report"));
    assert!(content.contains("Generated on: 5/3/2026"));
}

#[test]
fn test_export_csv_to_explicit_path() {
    let (dir, settings) = create_test_settings("en");
    let (calculator, _, report) = create_test_apis(settings);
    let ctx = create_session_after(&calculator, 1000.0, 700.0, 50.0);

    let target = dir.path().join("nested").join("out.csv");
    let path = report.export_csv(&ctx, Some(&target)).unwrap();

    assert_eq!(path, target);
    let content = std::fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("metric,value"));
    assert!(lines.any(|l| l == "utilization_rate,70"));
    assert!(content.lines().any(|l| l == "potential_revenue,15000"));
    assert!(content.lines().any(|l| l == "recommendation_tier,SCHEDULING"));
    assert!(!dir.path().join(DEFAULT_CSV_FILE_NAME).exists());
}

#[test]
fn test_export_json() {
    let (_dir, settings) = create_test_settings("en");
    let (calculator, _, report) = create_test_apis(settings);
    let ctx = create_session_after(&calculator, 500.0, 500.0, 0.0);

    let json = report.export_json(&ctx).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["utilization_rate"], 100.0);
    assert_eq!(value["unused_capacity"], 0.0);
    assert!(value["potential_revenue"].is_null());
    assert_eq!(value["recommendation_tier"], "EXPANSION_PRICING");
}

// ==========================================
// 邮件 (模拟)
// ==========================================

#[tokio::test]
async fn test_send_email_rejects_invalid_address() {
    let (_dir, settings) = create_test_settings("en");
    let (_, _, report) = create_test_apis(settings);
    let ctx = SessionContext::new();

    let err = report.send_email(&ctx, "invalid-address").await.unwrap_err();

    match err {
        ApiError::InvalidEmail(msg) => assert_eq!(msg, "Please enter a valid email address."),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_send_email_returns_receipt() {
    let (_dir, settings) = create_test_settings("en");
    let (calculator, _, report) = create_test_apis(settings);
    let ctx = create_session_after(&calculator, 1000.0, 700.0, 50.0);

    let receipt = report.send_email(&ctx, "name@example.com").await.unwrap();

    assert_eq!(receipt.recipient, "name@example.com");
    assert_eq!(receipt.subject, "Capacity Utilization Report");
    assert!(!receipt.message_id.is_empty());
}
