// ==========================================
// 排班决策支持核心 - 排班优化引擎
// ==========================================
// 职责: 消费需求预测与员工名册，贪心填补各时段人数缺口
// 输入: SchedulingContext（只读）
// 输出: ScheduleDraft（含 coverage_score 元数据）
// ==========================================
// 红线: 单次遍历，无回溯、无前瞻；不解释 SchedulingConstraint
// ==========================================

mod coverage;
mod greedy;


pub use coverage::{coverage_score, fulfillment_rate};
pub use greedy::GreedyScheduleOptimizer;

use crate::domain::context::SchedulingContext;
use crate::domain::schedule::ScheduleDraft;
use crate::engine::error::EngineError;
use async_trait::async_trait;

// ==========================================
// ScheduleOptimizationService Trait
// ==========================================
#[async_trait]
pub trait ScheduleOptimizationService: Send + Sync {
    /// 生成器名称（写入草案元数据）
    fn generator_name(&self) -> &str;

    /// 基于上下文生成排班草案
    async fn generate_schedule(
        &self,
        context: &SchedulingContext,
    ) -> Result<ScheduleDraft, EngineError>;
}
