// ==========================================
// 排班决策支持核心 - 引擎层错误类型
// ==========================================
// 说明: 查找未命中走兜底（沿用原值/跳过分配），不在此建模
// 说明: 组合预测中任一子策略失败，原样向上传播
// ==========================================

use crate::config::ConfigError;
use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("组合预测至少需要一个子策略")]
    EmptyEnsemble,

    #[error("预测策略执行失败: strategy={strategy}, reason={reason}")]
    ForecastStrategyFailed { strategy: String, reason: String },

    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    /// 外部策略实现的任意错误
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
