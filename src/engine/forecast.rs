// ==========================================
// 排班决策支持核心 - 需求预测引擎
// ==========================================
// 职责: 将原始需求信号平滑为需求预测
// 输入: 需求信号序列（无序，服务负责排序）
// 输出: DemandForecast（新值，不修改输入）
// ==========================================
// 策略: 基线移动平均 / 组合集成平均（可嵌套组合）
// ==========================================

mod baseline;
mod composite;

pub use baseline::BaselineDemandForecastingService;
pub use composite::CompositeDemandForecastingService;

use crate::config::ForecastConfig;
use crate::domain::forecast::{DemandForecast, DemandSignal};
use crate::engine::error::EngineError;
use crate::engine::strategy::ForecastStrategyKind;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// 预测模型版本
pub const FORECAST_MODEL_VERSION: &str = "1.0.0";

// ==========================================
// ForecastOptions - 单次预测参数
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ForecastOptions {
    /// 覆盖平滑窗口（仅基线策略读取；组合策略原样下传给子策略）
    #[serde(default)]
    pub window_size_override: Option<usize>,
}

// ==========================================
// DemandForecastingService Trait
// ==========================================
// 任何实现 generate_forecast 的对象都可被组合策略包装
#[async_trait]
pub trait DemandForecastingService: Send + Sync {
    /// 模型名称
    fn model_name(&self) -> &str;

    /// 生成需求预测
    async fn generate_forecast(
        &self,
        signals: &[DemandSignal],
        options: &ForecastOptions,
    ) -> Result<DemandForecast, EngineError>;
}

/// 保留两位小数
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 按配置构建预测服务
pub fn build_forecaster(
    config: &ForecastConfig,
) -> Result<Arc<dyn DemandForecastingService>, EngineError> {
    match config.strategy {
        ForecastStrategyKind::BaselineMovingAverage => Ok(Arc::new(
            BaselineDemandForecastingService::new(config.window_size)?,
        )),
        ForecastStrategyKind::CompositeEnsemble => {
            let strategies = config
                .effective_ensemble_windows()
                .into_iter()
                .map(|window| {
                    BaselineDemandForecastingService::new(window)
                        .map(|s| Arc::new(s) as Arc<dyn DemandForecastingService>)
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Arc::new(CompositeDemandForecastingService::new(strategies)?))
        }
    }
}
