// ==========================================
// 排班决策支持核心 - 策略定义
// ==========================================
// 用途：
// - 预测策略：基线移动平均 / 组合集成平均，按配置选择；
// - 排班策略：贪心覆盖（生成器名称写入草案元数据）。

use serde::{Deserialize, Serialize};

/// 需求预测策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ForecastStrategyKind {
    #[default]
    BaselineMovingAverage,
    CompositeEnsemble,
}

impl ForecastStrategyKind {
    /// 模型名称（写入 DemandForecast.model）
    pub fn as_str(&self) -> &'static str {
        match self {
            ForecastStrategyKind::BaselineMovingAverage => "baseline-moving-average",
            ForecastStrategyKind::CompositeEnsemble => "composite-ensemble",
        }
    }

    pub fn title_cn(&self) -> &'static str {
        match self {
            ForecastStrategyKind::BaselineMovingAverage => "基线移动平均",
            ForecastStrategyKind::CompositeEnsemble => "组合集成平均",
        }
    }
}

impl std::str::FromStr for ForecastStrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "baseline-moving-average" | "baseline_moving_average" | "baseline" => {
                Ok(ForecastStrategyKind::BaselineMovingAverage)
            }
            "composite-ensemble" | "composite_ensemble" | "composite" => {
                Ok(ForecastStrategyKind::CompositeEnsemble)
            }
            other => Err(format!("未知预测策略: {}", other)),
        }
    }
}

/// 排班优化策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OptimizationStrategyKind {
    #[default]
    GreedyCoverage,
}

impl OptimizationStrategyKind {
    /// 生成器名称（写入 ScheduleDraft.metadata.generator）
    pub fn as_str(&self) -> &'static str {
        match self {
            OptimizationStrategyKind::GreedyCoverage => "greedy-coverage",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_strategy_parse_aliases() {
        assert_eq!(
            "Baseline".parse::<ForecastStrategyKind>().unwrap(),
            ForecastStrategyKind::BaselineMovingAverage
        );
        assert_eq!(
            "composite_ensemble".parse::<ForecastStrategyKind>().unwrap(),
            ForecastStrategyKind::CompositeEnsemble
        );
        assert!("arima".parse::<ForecastStrategyKind>().is_err());
    }

    #[test]
    fn test_serde_uses_model_names() {
        let json = serde_json::to_string(&ForecastStrategyKind::CompositeEnsemble).unwrap();
        assert_eq!(json, "\"composite-ensemble\"");
        assert_eq!(OptimizationStrategyKind::default().as_str(), "greedy-coverage");
    }

    #[test]
    fn test_default_forecast_strategy_is_baseline() {
        assert_eq!(
            ForecastStrategyKind::default(),
            ForecastStrategyKind::BaselineMovingAverage
        );
    }
}
