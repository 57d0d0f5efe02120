// ==========================================
// 排班决策支持核心 - 排班草案领域模型
// ==========================================
// 红线: 优化服务只修改 assignments / metadata / updated_at，从不修改 status
// ==========================================

use crate::domain::types::{interval_start, split_interval, DraftStatus};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// ShiftAssignment - 班次分配
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftAssignment {
    pub staff_id: String,
    pub role: String,
    pub date: NaiveDate,
    pub start_time: String,
    /// 时段令牌缺少分隔符时为 None
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    pub location: String,
}

impl ShiftAssignment {
    /// 由时段令牌拆分出开始/结束时间
    pub fn from_interval(
        staff_id: &str,
        role: &str,
        date: NaiveDate,
        interval: &str,
        location: &str,
    ) -> Self {
        let (start_time, end_time) = split_interval(interval);
        Self {
            staff_id: staff_id.to_string(),
            role: role.to_string(),
            date,
            start_time,
            end_time,
            location: location.to_string(),
        }
    }

    /// 是否落在指定日期与时段（按开始时间前缀匹配）
    pub fn covers(&self, date: NaiveDate, interval: &str) -> bool {
        self.date == date && self.start_time == interval_start(interval)
    }
}

// ==========================================
// DraftMetadata - 草案元数据
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftMetadata {
    pub generator: String,
    pub coverage_score: f64,
}

// ==========================================
// ScheduleDraft - 排班草案
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDraft {
    pub id: String,
    pub name: String,
    pub status: DraftStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub assignments: Vec<ShiftAssignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DraftMetadata>,
}

impl ScheduleDraft {
    pub fn is_draft(&self) -> bool {
        self.status == DraftStatus::Draft
    }

    /// 覆盖分数（无元数据时为 None）
    pub fn coverage_score(&self) -> Option<f64> {
        self.metadata.as_ref().map(|m| m.coverage_score)
    }

    /// 指定日期与时段的已分配人数
    pub fn assigned_count(&self, date: NaiveDate, interval: &str) -> usize {
        self.assignments
            .iter()
            .filter(|a| a.covers(date, interval))
            .count()
    }
}
