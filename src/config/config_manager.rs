// ==========================================
// 产能利用率计算器 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写管理
// 存储: JSON 对象文件 (key-value),缺省项取默认值
// ==========================================

use crate::config::report_config_trait::ReportConfigReader;
use crate::domain::session::SnapshotFallbacks;
use crate::engine::chart::IndustryBenchmarks;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

pub type ConfigResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

/// 配置文件路径环境变量
pub const CONFIG_PATH_ENV: &str = "CAPACITY_COMPASS_CONFIG";

/// 导出目录环境变量
pub const EXPORT_DIR_ENV: &str = "CAPACITY_COMPASS_EXPORT_DIR";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl ConfigManager {
    /// 创建空配置 (全部取默认值)
    pub fn new() -> Self {
        Self {
            values: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// 从 JSON 文件加载配置
    ///
    /// # 参数
    /// - path: 配置文件路径,内容为 JSON 对象
    ///
    /// # 说明
    /// 数值/布尔值统一按字符串保存,读取时再解析
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("读取配置文件失败: {}: {}", path.display(), e))?;
        let manager = Self::from_json(&raw)?;
        tracing::info!(path = %path.display(), "配置文件加载完成");
        Ok(manager)
    }

    /// 从 JSON 字符串加载配置
    pub fn from_json(raw: &str) -> ConfigResult<Self> {
        let parsed: HashMap<String, Value> = serde_json::from_str(raw)?;
        let values = parsed
            .into_iter()
            .map(|(k, v)| {
                let text = match v {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                (k, text)
            })
            .collect();

        Ok(Self {
            values: Arc::new(RwLock::new(values)),
        })
    }

    /// 按环境变量加载配置
    ///
    /// CAPACITY_COMPASS_CONFIG 未设置时返回默认配置
    pub fn from_env() -> ConfigResult<Self> {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim()),
            _ => Ok(Self::new()),
        }
    }

    /// 读取配置值
    ///
    /// # 返回
    /// - Some(String): 配置值
    /// - None: 配置不存在
    fn get_config_value(&self, key: &str) -> ConfigResult<Option<String>> {
        let values = self
            .values
            .read()
            .map_err(|e| format!("锁获取失败: {}", e))?;
        Ok(values.get(key).cloned())
    }

    /// 读取配置值（公开方法，供其他模块复用）
    pub fn get_global_config_value(&self, key: &str) -> ConfigResult<Option<String>> {
        self.get_config_value(key)
    }

    /// 读取配置值，带默认值
    fn get_config_or_default(&self, key: &str, default: &str) -> ConfigResult<String> {
        Ok(self
            .get_config_value(key)?
            .unwrap_or_else(|| default.to_string()))
    }

    /// 读取浮点配置，格式错误时回退默认值
    fn get_f64_or_default(&self, key: &str, default: f64) -> ConfigResult<f64> {
        let value = match self.get_config_value(key)? {
            Some(v) => v,
            None => return Ok(default),
        };
        match value.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => {
                tracing::warn!(
                    config_key = key,
                    raw_value = %value,
                    default,
                    "配置格式错误，使用默认值"
                );
                Ok(default)
            }
        }
    }

    /// 读取非负整数配置，格式错误时回退默认值
    fn get_u64_or_default(&self, key: &str, default: u64) -> ConfigResult<u64> {
        let value = match self.get_config_value(key)? {
            Some(v) => v,
            None => return Ok(default),
        };
        match value.trim().parse::<u64>() {
            Ok(v) => Ok(v),
            Err(_) => {
                tracing::warn!(
                    config_key = key,
                    raw_value = %value,
                    default,
                    "配置格式错误，使用默认值"
                );
                Ok(default)
            }
        }
    }

    /// 写入配置值 (覆盖)
    pub fn set_config_value(&self, key: &str, value: &str) -> ConfigResult<()> {
        let mut values = self
            .values
            .write()
            .map_err(|e| format!("锁获取失败: {}", e))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// 获取所有配置的快照（JSON格式,按键排序）
    pub fn get_config_snapshot(&self) -> ConfigResult<String> {
        let values = self
            .values
            .read()
            .map_err(|e| format!("锁获取失败: {}", e))?;
        let sorted: std::collections::BTreeMap<&String, &String> = values.iter().collect();
        Ok(serde_json::to_string(&json!(sorted))?)
    }

    /// 从配置快照恢复配置
    ///
    /// # 返回
    /// - Ok(usize): 恢复的配置项数量
    ///
    /// # 注意
    /// 此方法会覆盖现有配置
    pub fn restore_config_from_snapshot(&self, snapshot_json: &str) -> ConfigResult<usize> {
        let restored: HashMap<String, String> = serde_json::from_str(snapshot_json)?;
        let count = restored.len();

        let mut values = self
            .values
            .write()
            .map_err(|e| format!("锁获取失败: {}", e))?;
        *values = restored;

        tracing::info!(count, "配置已从快照恢复");
        Ok(count)
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// ReportConfigReader Trait 实现
// ==========================================
#[async_trait]
impl ReportConfigReader for ConfigManager {
    async fn get_locale(&self) -> ConfigResult<String> {
        let value = self.get_config_or_default(config_keys::LOCALE, "en")?;
        Ok(crate::i18n::normalize_locale(&value).to_string())
    }

    async fn get_currency_symbol(&self) -> ConfigResult<String> {
        self.get_config_or_default(config_keys::CURRENCY_SYMBOL, "₹")
    }

    async fn get_company_name(&self) -> ConfigResult<String> {
        self.get_config_or_default(config_keys::COMPANY_NAME, "Your Company Name")
    }

    async fn get_snapshot_fallbacks(&self) -> ConfigResult<SnapshotFallbacks> {
        let defaults = SnapshotFallbacks::default();
        Ok(SnapshotFallbacks {
            max_capacity: self
                .get_f64_or_default(config_keys::FALLBACK_MAX_CAPACITY, defaults.max_capacity)?,
            actual_production: self.get_f64_or_default(
                config_keys::FALLBACK_ACTUAL_PRODUCTION,
                defaults.actual_production,
            )?,
            utilization_rate: self.get_f64_or_default(
                config_keys::FALLBACK_UTILIZATION_RATE,
                defaults.utilization_rate,
            )?,
        })
    }

    async fn get_industry_benchmarks(&self) -> ConfigResult<IndustryBenchmarks> {
        let defaults = IndustryBenchmarks::default();
        Ok(IndustryBenchmarks {
            industry_average: self.get_f64_or_default(
                config_keys::BENCHMARK_INDUSTRY_AVG,
                defaults.industry_average,
            )?,
            top_performers: self.get_f64_or_default(
                config_keys::BENCHMARK_TOP_PERFORMERS,
                defaults.top_performers,
            )?,
            low_performers: self.get_f64_or_default(
                config_keys::BENCHMARK_LOW_PERFORMERS,
                defaults.low_performers,
            )?,
        })
    }

    async fn get_export_dir(&self) -> ConfigResult<PathBuf> {
        match self.get_config_value(config_keys::EXPORT_DIR)? {
            Some(dir) if !dir.trim().is_empty() => Ok(PathBuf::from(dir.trim())),
            _ => Ok(crate::app::get_default_export_dir()),
        }
    }

    async fn get_mail_delay_ms(&self) -> ConfigResult<u64> {
        self.get_u64_or_default(config_keys::MAIL_DELAY_MS, 0)
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 展示
    pub const LOCALE: &str = "locale";
    pub const CURRENCY_SYMBOL: &str = "currency_symbol";
    pub const COMPANY_NAME: &str = "company_name";

    // 会话快照缺省值
    pub const FALLBACK_MAX_CAPACITY: &str = "fallback_max_capacity";
    pub const FALLBACK_ACTUAL_PRODUCTION: &str = "fallback_actual_production";
    pub const FALLBACK_UTILIZATION_RATE: &str = "fallback_utilization_rate";

    // 行业基准
    pub const BENCHMARK_INDUSTRY_AVG: &str = "benchmark_industry_avg";
    pub const BENCHMARK_TOP_PERFORMERS: &str = "benchmark_top_performers";
    pub const BENCHMARK_LOW_PERFORMERS: &str = "benchmark_low_performers";

    // 导出
    pub const EXPORT_DIR: &str = "export_dir";
    pub const MAIL_DELAY_MS: &str = "mail_delay_ms";
}
