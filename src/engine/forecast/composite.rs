// ==========================================
// 组合集成平均预测
// ==========================================
// 规则:
// 1) 所有子策略并发执行，任一失败则整体失败（错误原样返回）
// 2) 按原始信号顺序，以 (date, interval) 为键取各子预测值，
//    子预测缺该键时沿用原始 expected_demand
// 3) 求平均并保留两位小数
// ==========================================
// 注: 无环检测，组合嵌套由调用方保证
// ==========================================

use super::{round2, DemandForecastingService, ForecastOptions, FORECAST_MODEL_VERSION};
use crate::domain::forecast::{DemandForecast, DemandSignal};
use crate::engine::error::EngineError;
use crate::engine::strategy::ForecastStrategyKind;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use futures::future::try_join_all;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument};

pub struct CompositeDemandForecastingService {
    strategies: Vec<Arc<dyn DemandForecastingService>>,
}

impl CompositeDemandForecastingService {
    /// 构造函数
    ///
    /// # 参数
    /// - `strategies`: 子策略列表（至少一个）
    pub fn new(strategies: Vec<Arc<dyn DemandForecastingService>>) -> Result<Self, EngineError> {
        if strategies.is_empty() {
            return Err(EngineError::EmptyEnsemble);
        }
        Ok(Self { strategies })
    }

    pub fn strategy_count(&self) -> usize {
        self.strategies.len()
    }

    /// 子策略模型名称（按组合顺序）
    pub fn member_models(&self) -> Vec<String> {
        self.strategies
            .iter()
            .map(|s| s.model_name().to_string())
            .collect()
    }
}

#[async_trait]
impl DemandForecastingService for CompositeDemandForecastingService {
    fn model_name(&self) -> &str {
        ForecastStrategyKind::CompositeEnsemble.as_str()
    }

    #[instrument(skip(self, signals, options), fields(
        signals = signals.len(),
        members = self.strategies.len()
    ))]
    async fn generate_forecast(
        &self,
        signals: &[DemandSignal],
        options: &ForecastOptions,
    ) -> Result<DemandForecast, EngineError> {
        let forecasts = try_join_all(
            self.strategies
                .iter()
                .map(|strategy| strategy.generate_forecast(signals, options)),
        )
        .await?;

        // 同键重复时后者覆盖前者
        let lookups: Vec<HashMap<(NaiveDate, &str), f64>> = forecasts
            .iter()
            .map(|forecast| {
                forecast
                    .signals
                    .iter()
                    .map(|s| ((s.date, s.interval.as_str()), s.expected_demand))
                    .collect()
            })
            .collect();

        let member_count = lookups.len() as f64;
        let averaged: Vec<DemandSignal> = signals
            .iter()
            .map(|signal| {
                let key = (signal.date, signal.interval.as_str());
                let total: f64 = lookups
                    .iter()
                    .map(|lookup| lookup.get(&key).copied().unwrap_or(signal.expected_demand))
                    .sum();
                DemandSignal {
                    expected_demand: round2(total / member_count),
                    ..signal.clone()
                }
            })
            .collect();

        debug!(
            members = forecasts.len(),
            averaged = averaged.len(),
            "集成平均完成"
        );

        Ok(DemandForecast {
            generated_at: Utc::now(),
            model: self.model_name().to_string(),
            version: FORECAST_MODEL_VERSION.to_string(),
            signals: averaged,
        })
    }
}
