// ==========================================
// 排班决策支持核心 - 配置层
// ==========================================
// 职责: 构造级配置（非 CLI 参数），支持 JSON 加载与环境变量覆写
// ==========================================

pub mod error;
pub mod scheduling_config;

// 重导出核心配置
pub use error::ConfigError;
pub use scheduling_config::{
    config_keys, ForecastConfig, OptimizerConfig, SchedulingConfig, DEFAULT_WINDOW_SIZE,
};
