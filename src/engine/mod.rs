// ==========================================
// 排班决策支持核心 - 引擎层
// ==========================================
// 职责: 需求预测、贪心排班、运行编排
// 红线: 无持久化、无 I/O，输入输出均为内存值
// ==========================================

pub mod error;
pub mod forecast;
pub mod optimizer;
pub mod orchestrator;
pub mod strategy;

// 重导出核心引擎
pub use error::EngineError;
pub use forecast::{
    build_forecaster, BaselineDemandForecastingService, CompositeDemandForecastingService,
    DemandForecastingService, ForecastOptions,
};
pub use optimizer::{
    coverage_score, fulfillment_rate, GreedyScheduleOptimizer, ScheduleOptimizationService,
};
pub use orchestrator::{SchedulingOrchestrator, SchedulingRunRequest, SchedulingRunResult};
pub use strategy::{ForecastStrategyKind, OptimizationStrategyKind};
