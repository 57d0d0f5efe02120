// ==========================================
// GreedyScheduleOptimizer - 贪心覆盖排班
// ==========================================
// 规则:
// 1) 取上下文中状态为 Draft 的草案作为种子（无则从空开始）
// 2) staff_usage 只统计本次运行新增的分配（种子分配不计入）
// 3) 按预测顺序逐时段:
//    needed = max(0, ceil(demand) - 已有覆盖)
//    候选 = 可用员工，按本次使用量升序稳定排序
//    达到班次上限 / 已占用该时段的候选跳过，不消耗名额
// 4) 按日期分组（首次出现顺序）后展平
// 5) 计算 coverage_score 并写入元数据
// ==========================================

use super::coverage::coverage_score;
use super::ScheduleOptimizationService;
use crate::config::OptimizerConfig;
use crate::domain::context::SchedulingContext;
use crate::domain::schedule::{DraftMetadata, ScheduleDraft, ShiftAssignment};
use crate::domain::staff::StaffProfile;
use crate::domain::types::DraftStatus;
use crate::engine::error::EngineError;
use crate::engine::strategy::OptimizationStrategyKind;
use crate::perf::PerfGuard;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

pub struct GreedyScheduleOptimizer {
    config: OptimizerConfig,
}

impl GreedyScheduleOptimizer {
    /// 构造函数
    ///
    /// # 参数
    /// - `config`: 优化配置（max_shifts_per_day 为空表示不限）
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 单次贪心分配（同步、确定性）
    pub fn optimize(&self, context: &SchedulingContext) -> ScheduleDraft {
        let seed = context.active_draft();
        let mut assignments: Vec<ShiftAssignment> = seed
            .map(|draft| draft.assignments.clone())
            .unwrap_or_default();
        let seeded_count = assignments.len();

        let staff = context.staff();
        let mut staff_usage: HashMap<&str, u32> =
            staff.iter().map(|s| (s.id.as_str(), 0)).collect();

        let signals = &context.demand_forecast().signals;
        let mut covered_signals = 0usize;
        let mut shortfall_total = 0usize;

        for signal in signals {
            let required = signal.required_headcount();
            let existing = assignments
                .iter()
                .filter(|a| a.covers(signal.date, &signal.interval))
                .count();
            let needed = required.saturating_sub(existing);
            if needed == 0 {
                covered_signals += 1;
                continue;
            }

            let mut available: Vec<&StaffProfile> = staff
                .iter()
                .filter(|s| s.is_available(signal.date, &signal.interval))
                .collect();
            available.sort_by_key(|s| staff_usage.get(s.id.as_str()).copied().unwrap_or(0));

            let mut made = 0usize;
            for candidate in available {
                if made >= needed {
                    break;
                }

                let usage = staff_usage.get(candidate.id.as_str()).copied().unwrap_or(0);
                if let Some(cap) = self.config.max_shifts_per_day {
                    if usage >= cap {
                        continue;
                    }
                }

                if is_booked(&assignments, &candidate.id, signal.date, &signal.interval) {
                    continue;
                }

                let assignment = ShiftAssignment::from_interval(
                    &candidate.id,
                    &candidate.role,
                    signal.date,
                    &signal.interval,
                    &signal.location,
                );
                if assignment.end_time.is_none() {
                    warn!(
                        interval = %signal.interval,
                        date = %signal.date,
                        staff_id = %candidate.id,
                        "时段令牌缺少分隔符，结束时间未定义"
                    );
                }
                assignments.push(assignment);
                *staff_usage.entry(candidate.id.as_str()).or_insert(0) += 1;
                made += 1;
            }

            if made < needed {
                shortfall_total += needed - made;
                debug!(
                    date = %signal.date,
                    interval = %signal.interval,
                    location = %signal.location,
                    needed,
                    made,
                    "可用员工不足，时段人数缺口保留"
                );
            }
        }

        let assignments = group_by_date(assignments);
        let score = coverage_score(signals, &assignments);
        let created_count = assignments.len() - seeded_count;

        info!(
            signals = signals.len(),
            seeded = seeded_count,
            created = created_count,
            already_covered = covered_signals,
            shortfall = shortfall_total,
            coverage_score = score,
            "贪心排班完成"
        );

        let now = Utc::now();
        let (id, name, created_at) = match seed {
            Some(draft) => (draft.id.clone(), draft.name.clone(), draft.created_at),
            None => (
                Uuid::new_v4().to_string(),
                format!("排班草案 {}", now.format("%Y-%m-%d %H:%M")),
                now,
            ),
        };

        ScheduleDraft {
            id,
            name,
            status: DraftStatus::Draft,
            created_at,
            updated_at: now,
            assignments,
            metadata: Some(DraftMetadata {
                generator: self.generator_name().to_string(),
                coverage_score: score,
            }),
        }
    }
}

impl Default for GreedyScheduleOptimizer {
    fn default() -> Self {
        Self::new(OptimizerConfig::default())
    }
}

/// 员工是否已占用该日期/时段（含种子分配）
fn is_booked(
    assignments: &[ShiftAssignment],
    staff_id: &str,
    date: NaiveDate,
    interval: &str,
) -> bool {
    assignments
        .iter()
        .any(|a| a.staff_id == staff_id && a.covers(date, interval))
}

/// 按日期稳定分组后展平（分组顺序 = 日期首次出现顺序）
pub(crate) fn group_by_date(assignments: Vec<ShiftAssignment>) -> Vec<ShiftAssignment> {
    let mut groups: Vec<(NaiveDate, Vec<ShiftAssignment>)> = Vec::new();
    for assignment in assignments {
        match groups.iter_mut().find(|(date, _)| *date == assignment.date) {
            Some((_, group)) => group.push(assignment),
            None => groups.push((assignment.date, vec![assignment])),
        }
    }
    groups.into_iter().flat_map(|(_, group)| group).collect()
}

#[async_trait]
impl ScheduleOptimizationService for GreedyScheduleOptimizer {
    fn generator_name(&self) -> &str {
        OptimizationStrategyKind::GreedyCoverage.as_str()
    }

    #[instrument(skip(self, context), fields(
        staff = context.staff().len(),
        signals = context.demand_forecast().signals.len(),
        max_shifts_per_day = ?self.config.max_shifts_per_day
    ))]
    async fn generate_schedule(
        &self,
        context: &SchedulingContext,
    ) -> Result<ScheduleDraft, EngineError> {
        let _perf = PerfGuard::new("generate_schedule");
        Ok(self.optimize(context))
    }
}
