// ==========================================
// 排班决策支持核心 - 员工档案领域模型
// ==========================================
// 红线: availability 是员工唯一可被分配的时段来源，不建模部分时段
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffProfile {
    pub id: String,
    pub display_name: String,
    pub role: String,
    #[serde(default)]
    pub qualifications: Vec<String>,
    pub max_weekly_hours: f64,
    pub preferred_hours: f64,
    /// 日期 → 可用时段令牌集合
    #[serde(default)]
    pub availability: BTreeMap<NaiveDate, BTreeSet<String>>,
}

impl StaffProfile {
    /// 员工在指定日期是否可用于该时段（精确匹配令牌）
    pub fn is_available(&self, date: NaiveDate, interval: &str) -> bool {
        self.availability
            .get(&date)
            .map(|intervals| intervals.contains(interval))
            .unwrap_or(false)
    }

    /// 追加可用时段
    pub fn add_availability(&mut self, date: NaiveDate, interval: &str) {
        self.availability
            .entry(date)
            .or_default()
            .insert(interval.to_string());
    }
}
