// ==========================================
// 排班决策支持核心 - 排班配置
// ==========================================
// 职责: 预测平滑窗口、每人每次运行班次上限等构造级配置
// 红线: 未识别字段在构造时拒绝（deny_unknown_fields），不静默忽略
// ==========================================

use crate::config::error::ConfigError;
use crate::engine::strategy::ForecastStrategyKind;
use serde::{Deserialize, Serialize};

/// 配置键（环境变量覆写）
pub mod config_keys {
    pub const WINDOW_SIZE: &str = "WORKFORCE_SCHEDULER_WINDOW_SIZE";
    pub const MAX_SHIFTS_PER_DAY: &str = "WORKFORCE_SCHEDULER_MAX_SHIFTS_PER_DAY";
    pub const FORECAST_STRATEGY: &str = "WORKFORCE_SCHEDULER_FORECAST_STRATEGY";
}

/// 默认平滑窗口
pub const DEFAULT_WINDOW_SIZE: usize = 3;

fn default_window_size() -> usize {
    DEFAULT_WINDOW_SIZE
}

// ==========================================
// ForecastConfig - 预测配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ForecastConfig {
    /// 预测策略（默认基线移动平均）
    #[serde(default)]
    pub strategy: ForecastStrategyKind,

    /// 移动平均窗口（>= 1，默认 3）
    #[serde(default = "default_window_size")]
    pub window_size: usize,

    /// 组合预测的子策略窗口列表（为空时退化为 [window_size]）
    #[serde(default)]
    pub ensemble_window_sizes: Vec<usize>,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            strategy: ForecastStrategyKind::default(),
            window_size: DEFAULT_WINDOW_SIZE,
            ensemble_window_sizes: Vec::new(),
        }
    }
}

impl ForecastConfig {
    /// 组合预测实际使用的窗口列表
    pub fn effective_ensemble_windows(&self) -> Vec<usize> {
        if self.ensemble_window_sizes.is_empty() {
            vec![self.window_size]
        } else {
            self.ensemble_window_sizes.clone()
        }
    }
}

// ==========================================
// OptimizerConfig - 排班优化配置
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OptimizerConfig {
    /// 每名员工在一次运行中的班次上限（None = 不限）
    #[serde(default)]
    pub max_shifts_per_day: Option<u32>,
}

// ==========================================
// SchedulingConfig - 顶层配置
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SchedulingConfig {
    #[serde(default)]
    pub forecast: ForecastConfig,
    #[serde(default)]
    pub optimizer: OptimizerConfig,
}

impl SchedulingConfig {
    /// 从 JSON 字符串解析并校验
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: SchedulingConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// 校验取值范围
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.forecast.window_size == 0 {
            return Err(ConfigError::invalid(
                "forecast.windowSize",
                0,
                "平滑窗口必须 >= 1",
            ));
        }
        if let Some(bad) = self.forecast.ensemble_window_sizes.iter().find(|w| **w == 0) {
            return Err(ConfigError::invalid(
                "forecast.ensembleWindowSizes",
                bad,
                "子策略窗口必须 >= 1",
            ));
        }
        if self.optimizer.max_shifts_per_day == Some(0) {
            return Err(ConfigError::invalid(
                "optimizer.maxShiftsPerDay",
                0,
                "班次上限必须 >= 1（不限请留空）",
            ));
        }
        Ok(())
    }

    /// 应用环境变量覆写
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// 按键查询覆写值（便于测试注入）
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(config_keys::WINDOW_SIZE) {
            self.forecast.window_size = raw.trim().parse::<usize>().map_err(|e| {
                ConfigError::invalid(config_keys::WINDOW_SIZE, &raw, &e.to_string())
            })?;
        }

        if let Some(raw) = lookup(config_keys::MAX_SHIFTS_PER_DAY) {
            let trimmed = raw.trim();
            self.optimizer.max_shifts_per_day = if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.parse::<u32>().map_err(|e| {
                    ConfigError::invalid(config_keys::MAX_SHIFTS_PER_DAY, &raw, &e.to_string())
                })?)
            };
        }

        if let Some(raw) = lookup(config_keys::FORECAST_STRATEGY) {
            self.forecast.strategy = raw
                .parse::<ForecastStrategyKind>()
                .map_err(|msg| ConfigError::invalid(config_keys::FORECAST_STRATEGY, &raw, &msg))?;
        }

        self.validate()
    }
}
