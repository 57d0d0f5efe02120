// ==========================================
// 排班决策支持核心 - 需求预测领域模型
// ==========================================
// 红线: DemandForecast 生成后不可变，新预测即新值
// ==========================================

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// DemandSignal - 需求信号
// ==========================================
// 标识键: (date, interval, location)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemandSignal {
    pub date: NaiveDate,      // 日期
    pub interval: String,     // 时段令牌 "HH:MM-HH:MM"
    pub expected_demand: f64, // 期望人数（可为小数，使用时向上取整）
    pub location: String,     // 地点
}

impl DemandSignal {
    pub fn new(date: NaiveDate, interval: &str, expected_demand: f64, location: &str) -> Self {
        Self {
            date,
            interval: interval.to_string(),
            expected_demand,
            location: location.to_string(),
        }
    }

    /// 所需人数 = ceil(expected_demand)，负值按 0 处理
    pub fn required_headcount(&self) -> usize {
        self.expected_demand.max(0.0).ceil() as usize
    }
}

// ==========================================
// DemandForecast - 需求预测
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemandForecast {
    pub generated_at: DateTime<Utc>,
    pub model: String,
    pub version: String,
    pub signals: Vec<DemandSignal>,
}

impl DemandForecast {
    /// 空预测（无信号）
    pub fn empty(model: &str, version: &str) -> Self {
        Self {
            generated_at: Utc::now(),
            model: model.to_string(),
            version: version.to_string(),
            signals: Vec::new(),
        }
    }

    /// 总需求 = Σ expected_demand
    pub fn total_demand(&self) -> f64 {
        self.signals.iter().map(|s| s.expected_demand).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}
