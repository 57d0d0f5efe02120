// ==========================================
// 排班决策支持核心 - 指标事件
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 指标名称
pub mod names {
    /// 排班准确度（覆盖度评分）
    pub const SCHEDULE_ACCURACY: &str = "schedule.accuracy";
    /// 时段满足率
    pub const FULFILLMENT_RATE: &str = "schedule.fulfillment_rate";
}

/// 指标标签
pub type MetricTags = BTreeMap<String, String>;

/// 指标事件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricEvent {
    pub name: String,
    pub value: f64,
    #[serde(default)]
    pub tags: MetricTags,
    pub timestamp: DateTime<Utc>,
}

impl MetricEvent {
    pub fn new(name: &str, value: f64, tags: MetricTags) -> Self {
        Self {
            name: name.to_string(),
            value,
            tags,
            timestamp: Utc::now(),
        }
    }

    /// 读取标签值
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(|v| v.as_str())
    }
}

/// 由键值对构造标签
///
/// ```
/// use workforce_scheduler::metrics::tags;
/// let t = tags(&[("scheduleId", "demo")]);
/// assert_eq!(t.get("scheduleId").map(String::as_str), Some("demo"));
/// ```
pub fn tags(pairs: &[(&str, &str)]) -> MetricTags {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
