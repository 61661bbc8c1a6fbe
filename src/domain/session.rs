// ==========================================
// 产能利用率计算器 - 会话上下文
// ==========================================
// 职责: 持有最近一次成功计算的快照,由调用方显式传递
// 红线: 无全局状态; 仅成功计算后写入,重置时清空
// ==========================================

use crate::domain::capacity::{CalculationRecord, CapacityInput, UtilizationResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// 快照键 (字符串编码的键值对)
// ==========================================
pub mod snapshot_keys {
    pub const MAX_CAPACITY: &str = "maxCapacity";
    pub const ACTUAL_PRODUCTION: &str = "actualProduction";
    pub const UTILIZATION_RATE: &str = "utilizationRate";
}

// ==========================================
// SnapshotFallbacks - 快照缺失时的默认值
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapshotFallbacks {
    pub max_capacity: f64,
    pub actual_production: f64,
    pub utilization_rate: f64,
}

impl Default for SnapshotFallbacks {
    fn default() -> Self {
        Self {
            max_capacity: 1000.0,
            actual_production: 700.0,
            utilization_rate: 70.0,
        }
    }
}

// ==========================================
// ReportData - 图表/导出读取视图
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    pub max_capacity: f64,
    pub actual_production: f64,
    pub utilization_rate: f64,
}

impl ReportData {
    /// 闲置产能 (未取整,报告直接格式化)
    pub fn unused_capacity(&self) -> f64 {
        self.max_capacity - self.actual_production
    }

    /// 从字符串键值对解析,逐键回退
    ///
    /// 键缺失或无法解析为数字时使用对应的默认值
    pub fn from_entries(entries: &HashMap<String, String>, fallbacks: &SnapshotFallbacks) -> Self {
        let read = |key: &str, default: f64| -> f64 {
            entries
                .get(key)
                .and_then(|v| v.trim().parse::<f64>().ok())
                .unwrap_or(default)
        };

        Self {
            max_capacity: read(snapshot_keys::MAX_CAPACITY, fallbacks.max_capacity),
            actual_production: read(snapshot_keys::ACTUAL_PRODUCTION, fallbacks.actual_production),
            utilization_rate: read(snapshot_keys::UTILIZATION_RATE, fallbacks.utilization_rate),
        }
    }
}

// ==========================================
// SessionContext - 会话上下文
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionContext {
    last: Option<CalculationRecord>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一次成功计算 (覆盖上一次)
    pub fn record(&mut self, input: CapacityInput, result: UtilizationResult) {
        self.last = Some(CalculationRecord::new(input, result));
    }

    /// 清空快照
    pub fn clear(&mut self) {
        self.last = None;
    }

    pub fn last(&self) -> Option<&CalculationRecord> {
        self.last.as_ref()
    }

    pub fn has_snapshot(&self) -> bool {
        self.last.is_some()
    }

    /// 导出为字符串编码的键值对
    ///
    /// # 返回
    /// 无快照时返回空 map
    pub fn snapshot_entries(&self) -> HashMap<String, String> {
        let mut entries = HashMap::new();
        if let Some(record) = &self.last {
            entries.insert(
                snapshot_keys::MAX_CAPACITY.to_string(),
                record.input.max_capacity.to_string(),
            );
            entries.insert(
                snapshot_keys::ACTUAL_PRODUCTION.to_string(),
                record.input.actual_production.to_string(),
            );
            entries.insert(
                snapshot_keys::UTILIZATION_RATE.to_string(),
                record.result.utilization_rate.to_string(),
            );
        }
        entries
    }

    /// 读取报告数据,无快照时使用默认值
    pub fn report_data(&self, fallbacks: &SnapshotFallbacks) -> ReportData {
        ReportData::from_entries(&self.snapshot_entries(), fallbacks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_context_uses_fallbacks() {
        let ctx = SessionContext::new();
        let data = ctx.report_data(&SnapshotFallbacks::default());

        assert!(!ctx.has_snapshot());
        assert_eq!(data.max_capacity, 1000.0);
        assert_eq!(data.actual_production, 700.0);
        assert_eq!(data.utilization_rate, 70.0);
        assert_eq!(data.unused_capacity(), 300.0);
    }

    #[test]
    fn test_record_overwrites_and_clear() {
        let mut ctx = SessionContext::new();
        let result = UtilizationResult {
            utilization_rate: 50.0,
            unused_capacity: 100.0,
            potential_revenue: None,
        };
        ctx.record(CapacityInput::new(200.0, 100.0, 0.0), result);
        ctx.record(
            CapacityInput::new(400.0, 100.0, 0.0),
            UtilizationResult {
                utilization_rate: 25.0,
                unused_capacity: 300.0,
                potential_revenue: None,
            },
        );

        let entries = ctx.snapshot_entries();
        assert_eq!(entries.get(snapshot_keys::MAX_CAPACITY).unwrap(), "400");
        assert_eq!(entries.get(snapshot_keys::UTILIZATION_RATE).unwrap(), "25");

        ctx.clear();
        assert!(ctx.snapshot_entries().is_empty());
    }

    #[test]
    fn test_partial_entries_fall_back_per_key() {
        let mut entries = HashMap::new();
        entries.insert(snapshot_keys::MAX_CAPACITY.to_string(), "2500".to_string());
        entries.insert(snapshot_keys::UTILIZATION_RATE.to_string(), "n/a".to_string());

        let data = ReportData::from_entries(&entries, &SnapshotFallbacks::default());
        assert_eq!(data.max_capacity, 2500.0);
        assert_eq!(data.actual_production, 700.0);
        assert_eq!(data.utilization_rate, 70.0);
    }
}
