// ==========================================
// 覆盖度评分
// ==========================================
// coverage_score = 100 * Σ min(已排人数, expected_demand) / max(1, 总需求)
// 单时段超配不超过 100% 计分；总需求为 0 时得分为 0
// 计分按 (日期, 时段起点, 地点) 匹配，同一班次只计入所在地点的需求
// ==========================================

use crate::domain::forecast::DemandSignal;
use crate::domain::schedule::ShiftAssignment;
use crate::engine::forecast::round2;

fn scheduled_count(signal: &DemandSignal, assignments: &[ShiftAssignment]) -> usize {
    assignments
        .iter()
        .filter(|a| a.covers(signal.date, &signal.interval) && a.location == signal.location)
        .count()
}

/// 覆盖度评分（0~100，两位小数）
pub fn coverage_score(signals: &[DemandSignal], assignments: &[ShiftAssignment]) -> f64 {
    let total_demand: f64 = signals.iter().map(|s| s.expected_demand).sum();
    let fulfilled: f64 = signals
        .iter()
        .map(|s| (scheduled_count(s, assignments) as f64).min(s.expected_demand))
        .sum();

    let score = 100.0 * fulfilled / total_demand.max(1.0);
    round2(score.clamp(0.0, 100.0))
}

/// 满足率：所需人数被完全覆盖的时段占比（0~100，两位小数）
///
/// 需求为 0 的时段视为已满足；无信号时为 0。
pub fn fulfillment_rate(signals: &[DemandSignal], assignments: &[ShiftAssignment]) -> f64 {
    if signals.is_empty() {
        return 0.0;
    }
    let satisfied = signals
        .iter()
        .filter(|s| scheduled_count(s, assignments) >= s.required_headcount())
        .count();
    round2(100.0 * satisfied as f64 / signals.len() as f64)
}
