// ==========================================
// 排班决策支持核心 - 领域模型层
// ==========================================
// 职责: 定义需求信号、员工、排班草案、排班上下文
// 红线: 不含引擎逻辑，不含持久化
// ==========================================

pub mod context;
pub mod forecast;
pub mod schedule;
pub mod staff;
pub mod types;

// 重导出核心类型
pub use context::{
    SchedulingConstraint, SchedulingContext, SchedulingContextBuilder, SchedulingContextFactory,
};
pub use forecast::{DemandForecast, DemandSignal};
pub use schedule::{DraftMetadata, ScheduleDraft, ShiftAssignment};
pub use staff::StaffProfile;
pub use types::{interval_start, split_interval, DraftStatus};
