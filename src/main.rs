// ==========================================
// 产能利用率计算器 - 命令行入口
// ==========================================
// 用法:
//   capacity-compass <max_capacity> <actual_production> [revenue_per_unit]
//                    [--lang en|zh-CN] [--pdf PATH] [--csv PATH] [--json] [--email ADDR]
// ==========================================

use anyhow::{anyhow, bail, Context};
use capacity_compass::app::AppState;
use capacity_compass::config::{config_keys, ConfigManager};
use capacity_compass::export::format_en_in;
use capacity_compass::{logging, CapacityInput, SessionContext};
use std::path::PathBuf;

/// 命令行参数
#[derive(Debug, Default)]
struct CliArgs {
    numbers: Vec<f64>,
    lang: Option<String>,
    pdf: Option<PathBuf>,
    csv: Option<PathBuf>,
    json: bool,
    email: Option<String>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<CliArgs> {
    let mut parsed = CliArgs::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--lang" => parsed.lang = Some(args.next().context("--lang 缺少参数")?),
            "--pdf" => parsed.pdf = Some(PathBuf::from(args.next().context("--pdf 缺少参数")?)),
            "--csv" => parsed.csv = Some(PathBuf::from(args.next().context("--csv 缺少参数")?)),
            "--email" => parsed.email = Some(args.next().context("--email 缺少参数")?),
            "--json" => parsed.json = true,
            other if other.starts_with("--") => bail!("未知参数: {}", other),
            other => {
                let value: f64 = other
                    .trim()
                    .parse()
                    .with_context(|| format!("无法解析数字: {}", other))?;
                parsed.numbers.push(value);
            }
        }
    }

    if parsed.numbers.len() < 2 || parsed.numbers.len() > 3 {
        return Err(anyhow!(
            "用法: capacity-compass <max_capacity> <actual_production> [revenue_per_unit] \
             [--lang en|zh-CN] [--pdf PATH] [--csv PATH] [--json] [--email ADDR]"
        ));
    }
    Ok(parsed)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let args = parse_args(std::env::args().skip(1))?;

    tracing::info!("产能利用率计算器 v{}", capacity_compass::VERSION);

    let config = ConfigManager::from_env().map_err(|e| anyhow!("加载配置失败: {}", e))?;
    if let Some(lang) = &args.lang {
        config
            .set_config_value(config_keys::LOCALE, lang)
            .map_err(|e| anyhow!("设置语言失败: {}", e))?;
    }

    let state = AppState::new(config).await.map_err(|e| anyhow!(e))?;
    let mut session = SessionContext::new();

    let input = CapacityInput::new(
        args.numbers[0],
        args.numbers[1],
        args.numbers.get(2).copied().unwrap_or(0.0),
    );

    let response = state.calculator_api.calculate(&mut session, input)?;
    let result = &response.result;
    let hints = &response.card_hints;

    println!("{}% ({})", result.utilization_rate, hints.utilization_hint);
    println!("{} ({})", format_en_in(result.unused_capacity), hints.unused_hint);
    if let (Some(revenue), Some(impact)) = (result.potential_revenue, &hints.revenue_impact_hint) {
        println!(
            "{}{} ({})",
            state.settings.currency_symbol,
            format_en_in(revenue),
            impact
        );
    }
    println!("{}: {}", response.tier_label, response.tier_description);
    println!();

    let insights = state.dashboard_api.insights(&session, &mut rand::thread_rng());
    println!("{}", insights.analysis);
    println!();

    println!("{}", state.report_api.text_report(&session));

    if let Some(path) = &args.pdf {
        let written = state.report_api.export_pdf(&session, Some(path))?;
        println!("PDF: {}", written.display());
    }
    if let Some(path) = &args.csv {
        let written = state.report_api.export_csv(&session, Some(path))?;
        println!("CSV: {}", written.display());
    }
    if args.json {
        println!("{}", state.report_api.export_json(&session)?);
    }
    if let Some(address) = &args.email {
        let receipt = state.report_api.send_email(&session, address).await?;
        println!("Email: {} ({})", receipt.recipient, receipt.message_id);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn test_parse_args_positional_and_flags() {
        let parsed = parse_args(args(&["1000", "700", "50", "--lang", "zh-CN", "--json"])).unwrap();
        assert_eq!(parsed.numbers, vec![1000.0, 700.0, 50.0]);
        assert_eq!(parsed.lang.as_deref(), Some("zh-CN"));
        assert!(parsed.json);
    }

    #[test]
    fn test_parse_args_rejects_missing_numbers() {
        assert!(parse_args(args(&["1000"])).is_err());
        assert!(parse_args(args(&["1000", "abc"])).is_err());
        assert!(parse_args(args(&["1000", "700", "--bogus"])).is_err());
    }
}
