// ==========================================
// 排班决策支持核心 - 指标层
// ==========================================
// 职责: 指标事件的发布/订阅旁路，供外部看板与告警消费
// 红线: 优化算法本身不读取指标
// ==========================================

pub mod event;
pub mod registry;

pub use event::{names, tags, MetricEvent, MetricTags};
pub use registry::{MetricListener, MetricsRegistry, MetricsSink, NoOpMetricsSink};
