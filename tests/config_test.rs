// ==========================================
// 配置管理集成测试
// ==========================================
// 测试目标: 验证 JSON 配置文件加载、默认值、格式错误回退
// ==========================================

use capacity_compass::config::{config_keys, ConfigManager, ReportConfigReader, ReportSettings};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::NamedTempFile;

/// 写入临时配置文件
fn write_config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_defaults_without_config() {
    let config = ConfigManager::new();

    assert_eq!(config.get_locale().await.unwrap(), "en");
    assert_eq!(config.get_currency_symbol().await.unwrap(), "₹");
    assert_eq!(config.get_company_name().await.unwrap(), "Your Company Name");
    assert_eq!(config.get_mail_delay_ms().await.unwrap(), 0);

    let fallbacks = config.get_snapshot_fallbacks().await.unwrap();
    assert_eq!(fallbacks.max_capacity, 1000.0);
    assert_eq!(fallbacks.actual_production, 700.0);
    assert_eq!(fallbacks.utilization_rate, 70.0);

    let benchmarks = config.get_industry_benchmarks().await.unwrap();
    assert_eq!(benchmarks.industry_average, 75.0);
    assert_eq!(benchmarks.top_performers, 90.0);
    assert_eq!(benchmarks.low_performers, 60.0);
}

#[tokio::test]
async fn test_load_from_file() {
    let file = write_config_file(
        r#"{
            "locale": "zh-CN",
            "currency_symbol": "$",
            "company_name": "Acme",
            "fallback_max_capacity": 2000,
            "benchmark_industry_avg": "72.5",
            "export_dir": "/tmp/capacity-exports",
            "mail_delay_ms": 1500
        }"#,
    );

    let config = ConfigManager::from_file(file.path()).unwrap();
    let settings = ReportSettings::load(&config).await.unwrap();

    assert_eq!(settings.locale, "zh-CN");
    assert_eq!(settings.currency_symbol, "$");
    assert_eq!(settings.company_name, "Acme");
    assert_eq!(settings.fallbacks.max_capacity, 2000.0);
    assert_eq!(settings.fallbacks.actual_production, 700.0);
    assert_eq!(settings.benchmarks.industry_average, 72.5);
    assert_eq!(settings.export_dir, PathBuf::from("/tmp/capacity-exports"));
    assert_eq!(settings.mail_delay, Duration::from_millis(1500));
}

#[tokio::test]
async fn test_malformed_numbers_fall_back() {
    let config = ConfigManager::from_json(
        r#"{"fallback_utilization_rate": "seventy", "benchmark_top_performers": "NaN", "mail_delay_ms": "-5"}"#,
    )
    .unwrap();

    let fallbacks = config.get_snapshot_fallbacks().await.unwrap();
    assert_eq!(fallbacks.utilization_rate, 70.0);

    let benchmarks = config.get_industry_benchmarks().await.unwrap();
    assert_eq!(benchmarks.top_performers, 90.0);

    assert_eq!(config.get_mail_delay_ms().await.unwrap(), 0);
}

#[tokio::test]
async fn test_mail_delay_parsing() {
    let config = ConfigManager::new();

    config.set_config_value(config_keys::MAIL_DELAY_MS, " 250 ").unwrap();
    assert_eq!(config.get_mail_delay_ms().await.unwrap(), 250);

    for bad in ["soon", "1.5", "-20", ""] {
        config.set_config_value(config_keys::MAIL_DELAY_MS, bad).unwrap();
        assert_eq!(config.get_mail_delay_ms().await.unwrap(), 0, "raw={:?}", bad);
    }

    let settings = ReportSettings::load(&config).await.unwrap();
    assert_eq!(settings.mail_delay, Duration::ZERO);
}

#[tokio::test]
async fn test_unknown_locale_normalized() {
    let config = ConfigManager::new();
    config.set_config_value(config_keys::LOCALE, "fr").unwrap();
    assert_eq!(config.get_locale().await.unwrap(), "en");

    config.set_config_value(config_keys::LOCALE, "zh").unwrap();
    assert_eq!(config.get_locale().await.unwrap(), "zh-CN");
}

#[test]
fn test_missing_file_is_error() {
    let result = ConfigManager::from_file("/nonexistent/capacity-compass.json");
    assert!(result.is_err());
}
