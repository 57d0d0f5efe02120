// ==========================================
// 排班决策支持核心 - 排班上下文
// ==========================================
// 职责: 组装员工、草案、需求预测、约束为一次优化运行的只读上下文
// 红线: 构造后不可变（字段私有，仅提供只读访问器）
// ==========================================

use crate::domain::forecast::DemandForecast;
use crate::domain::schedule::ScheduleDraft;
use crate::domain::staff::StaffProfile;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// SchedulingConstraint - 排班约束（不透明）
// ==========================================
// 贪心算法不解释约束，仅透传给后续约束校验协作者
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingConstraint {
    pub id: String,
    pub kind: String,
    #[serde(default)]
    pub payload: serde_json::Value,
}

// ==========================================
// SchedulingContext - 排班上下文
// ==========================================
#[derive(Debug, Clone)]
pub struct SchedulingContext {
    staff: Vec<StaffProfile>,
    staff_usage_hints: Option<HashMap<String, u32>>,
    demand_forecast: DemandForecast,
    constraints: Vec<SchedulingConstraint>,
    drafts: Vec<ScheduleDraft>,
}

impl SchedulingContext {
    pub fn builder() -> SchedulingContextBuilder {
        SchedulingContextBuilder::default()
    }

    pub fn staff(&self) -> &[StaffProfile] {
        &self.staff
    }

    /// 员工使用量提示（仅透传，贪心算法不读取）
    pub fn staff_usage_hints(&self) -> Option<&HashMap<String, u32>> {
        self.staff_usage_hints.as_ref()
    }

    pub fn demand_forecast(&self) -> &DemandForecast {
        &self.demand_forecast
    }

    pub fn constraints(&self) -> &[SchedulingConstraint] {
        &self.constraints
    }

    pub fn drafts(&self) -> &[ScheduleDraft] {
        &self.drafts
    }

    /// 第一个状态为 Draft 的草案（预期至多一个）
    pub fn active_draft(&self) -> Option<&ScheduleDraft> {
        self.drafts.iter().find(|d| d.is_draft())
    }
}

// ==========================================
// SchedulingContextFactory - 上下文工厂
// ==========================================
pub struct SchedulingContextFactory;

impl SchedulingContextFactory {
    /// 组装排班上下文
    pub fn create(
        staff: Vec<StaffProfile>,
        demand_forecast: DemandForecast,
        drafts: Vec<ScheduleDraft>,
        constraints: Vec<SchedulingConstraint>,
    ) -> SchedulingContext {
        tracing::debug!(
            staff = staff.len(),
            signals = demand_forecast.signals.len(),
            drafts = drafts.len(),
            constraints = constraints.len(),
            "组装排班上下文"
        );
        SchedulingContext {
            staff,
            staff_usage_hints: None,
            demand_forecast,
            constraints,
            drafts,
        }
    }
}

// ==========================================
// SchedulingContextBuilder - 上下文构建器
// ==========================================
#[derive(Debug, Default)]
pub struct SchedulingContextBuilder {
    staff: Vec<StaffProfile>,
    staff_usage_hints: Option<HashMap<String, u32>>,
    demand_forecast: Option<DemandForecast>,
    constraints: Vec<SchedulingConstraint>,
    drafts: Vec<ScheduleDraft>,
}

impl SchedulingContextBuilder {
    pub fn staff(mut self, staff: Vec<StaffProfile>) -> Self {
        self.staff = staff;
        self
    }

    pub fn staff_usage_hints(mut self, hints: HashMap<String, u32>) -> Self {
        self.staff_usage_hints = Some(hints);
        self
    }

    pub fn demand_forecast(mut self, forecast: DemandForecast) -> Self {
        self.demand_forecast = Some(forecast);
        self
    }

    pub fn constraints(mut self, constraints: Vec<SchedulingConstraint>) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn drafts(mut self, drafts: Vec<ScheduleDraft>) -> Self {
        self.drafts = drafts;
        self
    }

    /// 构建上下文；未提供预测时使用空预测
    pub fn build(self) -> SchedulingContext {
        let forecast = self
            .demand_forecast
            .unwrap_or_else(|| DemandForecast::empty("empty", "0.0.0"));
        let mut context =
            SchedulingContextFactory::create(self.staff, forecast, self.drafts, self.constraints);
        context.staff_usage_hints = self.staff_usage_hints;
        context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::DraftStatus;
    use chrono::Utc;

    fn draft(id: &str, status: DraftStatus) -> ScheduleDraft {
        ScheduleDraft {
            id: id.to_string(),
            name: id.to_string(),
            status,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            assignments: vec![],
            metadata: None,
        }
    }

    #[test]
    fn test_active_draft_skips_published() {
        let context = SchedulingContext::builder()
            .drafts(vec![
                draft("D-PUB", DraftStatus::Published),
                draft("D-1", DraftStatus::Draft),
                draft("D-2", DraftStatus::Draft),
            ])
            .build();

        assert_eq!(context.active_draft().map(|d| d.id.as_str()), Some("D-1"));
    }

    #[test]
    fn test_builder_defaults_to_empty_forecast() {
        let mut hints = HashMap::new();
        hints.insert("S1".to_string(), 3);
        let context = SchedulingContext::builder().staff_usage_hints(hints).build();

        assert!(context.demand_forecast().is_empty());
        assert!(context.staff().is_empty());
        assert!(context.active_draft().is_none());
        assert_eq!(context.staff_usage_hints().and_then(|h| h.get("S1")), Some(&3));
    }
}
