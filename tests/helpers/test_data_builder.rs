// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use chrono::{NaiveDate, Utc};
use std::collections::BTreeMap;
use workforce_scheduler::domain::forecast::{DemandForecast, DemandSignal};
use workforce_scheduler::domain::schedule::{ScheduleDraft, ShiftAssignment};
use workforce_scheduler::domain::staff::StaffProfile;
use workforce_scheduler::domain::types::DraftStatus;

/// 2026-03-{day}
pub fn day(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, day).unwrap()
}

/// 创建需求信号
pub fn signal(date: NaiveDate, interval: &str, demand: f64, location: &str) -> DemandSignal {
    DemandSignal::new(date, interval, demand, location)
}

/// 按日期递增生成同一时段、同一地点的信号序列
pub fn daily_series(demands: &[f64]) -> Vec<DemandSignal> {
    demands
        .iter()
        .enumerate()
        .map(|(i, d)| signal(day(i as u32 + 1), "08:00-12:00", *d, "store-1"))
        .collect()
}

/// 直接以给定信号构造预测（跳过平滑）
pub fn forecast_of(signals: Vec<DemandSignal>) -> DemandForecast {
    DemandForecast {
        generated_at: Utc::now(),
        model: "fixture".to_string(),
        version: "0.0.1".to_string(),
        signals,
    }
}

// ==========================================
// StaffProfile 构建器
// ==========================================

pub struct StaffBuilder {
    id: String,
    display_name: Option<String>,
    role: String,
    qualifications: Vec<String>,
    max_weekly_hours: f64,
    preferred_hours: f64,
    availability: Vec<(NaiveDate, String)>,
}

impl StaffBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            display_name: None,
            role: "clerk".to_string(),
            qualifications: vec![],
            max_weekly_hours: 40.0,
            preferred_hours: 32.0,
            availability: vec![],
        }
    }

    pub fn role(mut self, role: &str) -> Self {
        self.role = role.to_string();
        self
    }

    pub fn display_name(mut self, name: &str) -> Self {
        self.display_name = Some(name.to_string());
        self
    }

    pub fn qualification(mut self, q: &str) -> Self {
        self.qualifications.push(q.to_string());
        self
    }

    pub fn available(mut self, date: NaiveDate, interval: &str) -> Self {
        self.availability.push((date, interval.to_string()));
        self
    }

    pub fn build(self) -> StaffProfile {
        let mut profile = StaffProfile {
            display_name: self.display_name.unwrap_or_else(|| format!("员工{}", self.id)),
            id: self.id,
            role: self.role,
            qualifications: self.qualifications,
            max_weekly_hours: self.max_weekly_hours,
            preferred_hours: self.preferred_hours,
            availability: BTreeMap::new(),
        };
        for (date, interval) in &self.availability {
            profile.add_availability(*date, interval);
        }
        profile
    }
}

// ==========================================
// ScheduleDraft 构建器
// ==========================================

pub struct DraftBuilder {
    id: String,
    status: DraftStatus,
    assignments: Vec<ShiftAssignment>,
}

impl DraftBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            status: DraftStatus::Draft,
            assignments: vec![],
        }
    }

    pub fn status(mut self, status: DraftStatus) -> Self {
        self.status = status;
        self
    }

    pub fn assignment(
        mut self,
        staff_id: &str,
        date: NaiveDate,
        interval: &str,
        location: &str,
    ) -> Self {
        self.assignments.push(ShiftAssignment::from_interval(
            staff_id, "clerk", date, interval, location,
        ));
        self
    }

    pub fn build(self) -> ScheduleDraft {
        let now = Utc::now();
        ScheduleDraft {
            name: format!("草案{}", self.id),
            id: self.id,
            status: self.status,
            created_at: now,
            updated_at: now,
            assignments: self.assignments,
            metadata: None,
        }
    }
}
