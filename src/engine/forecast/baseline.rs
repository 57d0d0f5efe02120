// ==========================================
// 基线移动平均预测
// ==========================================
// 规则:
// 1) 按 date 升序稳定排序
// 2) 位置 i 的窗口 = [max(0, i-window+1), i]，跨全部信号按位置计算
//    （不按 location/interval 分组，多序列交错时会相互混合）
// 3) expected_demand 替换为窗口均值（两位小数），其余字段透传
// ==========================================

use super::{round2, DemandForecastingService, ForecastOptions, FORECAST_MODEL_VERSION};
use crate::config::{ConfigError, DEFAULT_WINDOW_SIZE};
use crate::domain::forecast::{DemandForecast, DemandSignal};
use crate::engine::error::EngineError;
use crate::engine::strategy::ForecastStrategyKind;
use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, instrument};

#[derive(Debug, Clone)]
pub struct BaselineDemandForecastingService {
    window_size: usize,
}

impl BaselineDemandForecastingService {
    /// 构造函数
    ///
    /// # 参数
    /// - `window_size`: 平滑窗口（>= 1）
    pub fn new(window_size: usize) -> Result<Self, ConfigError> {
        validate_window(window_size, "windowSize")?;
        Ok(Self { window_size })
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// 排序并做移动平均（纯函数）
    pub fn smooth(signals: &[DemandSignal], window_size: usize) -> Vec<DemandSignal> {
        let mut sorted = signals.to_vec();
        sorted.sort_by_key(|s| s.date);

        let window_size = window_size.max(1);
        let mut smoothed = Vec::with_capacity(sorted.len());
        for (i, signal) in sorted.iter().enumerate() {
            let start = (i + 1).saturating_sub(window_size);
            let window = &sorted[start..=i];
            let mean = window.iter().map(|s| s.expected_demand).sum::<f64>() / window.len() as f64;
            smoothed.push(DemandSignal {
                expected_demand: round2(mean),
                ..signal.clone()
            });
        }
        smoothed
    }
}

impl Default for BaselineDemandForecastingService {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

fn validate_window(window_size: usize, key: &str) -> Result<(), ConfigError> {
    if window_size == 0 {
        return Err(ConfigError::invalid(key, window_size, "平滑窗口必须 >= 1"));
    }
    Ok(())
}

#[async_trait]
impl DemandForecastingService for BaselineDemandForecastingService {
    fn model_name(&self) -> &str {
        ForecastStrategyKind::BaselineMovingAverage.as_str()
    }

    #[instrument(skip(self, signals, options), fields(
        signals = signals.len(),
        window_size = self.window_size
    ))]
    async fn generate_forecast(
        &self,
        signals: &[DemandSignal],
        options: &ForecastOptions,
    ) -> Result<DemandForecast, EngineError> {
        let window_size = match options.window_size_override {
            Some(w) => {
                validate_window(w, "windowSizeOverride")?;
                w
            }
            None => self.window_size,
        };

        let smoothed = Self::smooth(signals, window_size);
        debug!(window_size, smoothed = smoothed.len(), "移动平均完成");

        Ok(DemandForecast {
            generated_at: Utc::now(),
            model: self.model_name().to_string(),
            version: FORECAST_MODEL_VERSION.to_string(),
            signals: smoothed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn signal(day: u32, demand: f64) -> DemandSignal {
        DemandSignal::new(
            NaiveDate::from_ymd_opt(2026, 3, day).unwrap(),
            "08:00-12:00",
            demand,
            "store-1",
        )
    }

    #[test]
    fn test_smooth_trailing_window() {
        let smoothed = BaselineDemandForecastingService::smooth(
            &[signal(1, 4.0), signal(2, 8.0), signal(3, 6.0)],
            2,
        );
        let values: Vec<f64> = smoothed.iter().map(|s| s.expected_demand).collect();
        assert_eq!(values, vec![4.0, 6.0, 7.0]);
    }

    #[test]
    fn test_smooth_sorts_by_date_stably() {
        // 同一天的两条信号保持原始相对顺序
        let mut later = signal(2, 10.0);
        later.location = "store-2".to_string();
        let input = vec![signal(3, 6.0), signal(2, 2.0), later, signal(1, 4.0)];

        let smoothed = BaselineDemandForecastingService::smooth(&input, 1);
        let order: Vec<(u32, &str)> = smoothed
            .iter()
            .map(|s| (chrono::Datelike::day(&s.date), s.location.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![(1, "store-1"), (2, "store-1"), (2, "store-2"), (3, "store-1")]
        );
    }

    #[test]
    fn test_smooth_rounds_two_decimals() {
        let smoothed = BaselineDemandForecastingService::smooth(
            &[signal(1, 1.0), signal(2, 1.0), signal(3, 2.0)],
            3,
        );
        assert_eq!(smoothed[2].expected_demand, 1.33);
    }

    #[test]
    fn test_new_rejects_zero_window() {
        assert!(BaselineDemandForecastingService::new(0).is_err());
        assert_eq!(BaselineDemandForecastingService::default().window_size(), 3);
    }

    #[tokio::test]
    async fn test_generate_forecast_empty_input() {
        let service = BaselineDemandForecastingService::new(3).unwrap();
        let forecast = service
            .generate_forecast(&[], &ForecastOptions::default())
            .await
            .unwrap();
        assert!(forecast.signals.is_empty());
        assert_eq!(forecast.model, "baseline-moving-average");
        assert_eq!(forecast.version, "1.0.0");
    }

    #[tokio::test]
    async fn test_window_override() {
        let service = BaselineDemandForecastingService::new(1).unwrap();
        let options = ForecastOptions {
            window_size_override: Some(2),
        };
        let forecast = service
            .generate_forecast(&[signal(1, 4.0), signal(2, 8.0)], &options)
            .await
            .unwrap();
        assert_eq!(forecast.signals[1].expected_demand, 6.0);

        let bad = ForecastOptions {
            window_size_override: Some(0),
        };
        assert!(service.generate_forecast(&[], &bad).await.is_err());
    }
}
