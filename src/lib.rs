// ==========================================
// 排班决策支持核心 - 核心库
// ==========================================
// 职责: 需求信号平滑为预测 + 贪心分配员工覆盖预测
// 系统定位: 决策支持（输出草案，由调用方决定发布/持久化）
// 边界: 无持久化、无鉴权、无 UI，输入输出均为内存值
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 预测/排班/编排
pub mod engine;

// 配置层 - 构造级配置
pub mod config;

// 指标层 - 发布/订阅旁路
pub mod metrics;

// 日志系统
pub mod logging;

// 性能统计
pub mod perf;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    DemandForecast, DemandSignal, DraftMetadata, DraftStatus, ScheduleDraft, SchedulingConstraint,
    SchedulingContext, SchedulingContextBuilder, SchedulingContextFactory, ShiftAssignment,
    StaffProfile,
};

// 引擎
pub use engine::{
    BaselineDemandForecastingService, CompositeDemandForecastingService, DemandForecastingService,
    EngineError, ForecastOptions, GreedyScheduleOptimizer, ScheduleOptimizationService,
    SchedulingOrchestrator, SchedulingRunRequest, SchedulingRunResult,
};

// 配置
pub use config::{ConfigError, ForecastConfig, OptimizerConfig, SchedulingConfig};

// 指标
pub use metrics::{MetricEvent, MetricsRegistry, MetricsSink, NoOpMetricsSink};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "排班决策支持核心";
