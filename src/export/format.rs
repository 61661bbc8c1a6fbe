// ==========================================
// 产能利用率计算器 - 报告数字/日期格式化
// ==========================================
// 数字: en-IN 分组 (12,34,567.5), 最多 3 位小数
// 日期: d/m/yyyy
// ==========================================

use chrono::{Datelike, NaiveDate};

/// en-IN 数字格式
///
/// 末三位一组,其余两位一组; 小数最多 3 位并去掉末尾 0
pub fn format_en_in(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let rounded = (value.abs() * 1000.0).round() / 1000.0;
    let negative = value < 0.0 && rounded != 0.0;

    let text = format!("{:.3}", rounded);
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_indian(int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (h, t) = rest.split_at(rest.len() - 2);
        groups.push(t);
        rest = h;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// 利用率 (保留1位小数)
pub fn format_rate(rate: f64) -> String {
    format!("{:.1}", rate)
}

/// 报告日期 (en-IN: d/m/yyyy)
pub fn format_report_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.day(), date.month(), date.year())
}
