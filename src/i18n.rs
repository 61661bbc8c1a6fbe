// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持英文（默认）和中文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// 报告/分级文案统一通过 *_in 接口显式指定语言,不依赖全局 locale
// ==========================================

/// 默认语言
pub const DEFAULT_LOCALE: &str = "en";

/// 规范化语言代码
///
/// `zh`、`zh-CN`、`zh_cn` 等归一为 `zh-CN`，其余一律 `en`
pub fn normalize_locale(locale: &str) -> &'static str {
    let lower = locale.trim().to_lowercase();
    if lower.starts_with("zh") {
        "zh-CN"
    } else {
        DEFAULT_LOCALE
    }
}

/// 翻译消息（指定语言）
///
/// # 示例
/// ```no_run
/// use capacity_compass::i18n::t_in;
/// let label = t_in("en", "tier.moderate.label");
/// ```
pub fn t_in(locale: &str, key: &str) -> String {
    let locale = normalize_locale(locale);
    rust_i18n::t!(key, locale = locale).to_string()
}

/// 翻译消息（指定语言,带参数）
///
/// 占位符格式: `%{name}`
pub fn t_with_args_in(locale: &str, key: &str, args: &[(&str, &str)]) -> String {
    let mut result = t_in(locale, key);
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

/// 读取三条列表文案 (`<prefix>.item_1` .. `<prefix>.item_3`)
pub fn items_in(locale: &str, prefix: &str) -> [String; 3] {
    [1, 2, 3].map(|i| t_in(locale, &format!("{}.item_{}", prefix, i)))
}
