// ==========================================
// 排班决策支持核心 - 引擎编排器
// ==========================================
// 用途: 串联一次完整排班运行
// 流程: 原始信号 → 需求预测 → 排班上下文 → 贪心排班 → 指标旁路
// ==========================================

use crate::config::SchedulingConfig;
use crate::domain::context::{SchedulingConstraint, SchedulingContext};
use crate::domain::forecast::{DemandForecast, DemandSignal};
use crate::domain::schedule::ScheduleDraft;
use crate::domain::staff::StaffProfile;
use crate::engine::error::EngineError;
use crate::engine::forecast::{build_forecaster, DemandForecastingService, ForecastOptions};
use crate::engine::optimizer::{
    coverage_score, fulfillment_rate, GreedyScheduleOptimizer, ScheduleOptimizationService,
};
use crate::metrics::{names, tags, MetricEvent, MetricsSink};
use crate::perf::PerfGuard;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument};

// ==========================================
// SchedulingRunRequest - 运行请求
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct SchedulingRunRequest {
    pub signals: Vec<DemandSignal>,
    pub staff: Vec<StaffProfile>,
    pub drafts: Vec<ScheduleDraft>,
    pub constraints: Vec<SchedulingConstraint>,
    pub staff_usage_hints: Option<HashMap<String, u32>>,
    pub forecast_options: ForecastOptions,
}

impl SchedulingRunRequest {
    pub fn new(signals: Vec<DemandSignal>, staff: Vec<StaffProfile>) -> Self {
        Self {
            signals,
            staff,
            ..Self::default()
        }
    }

    pub fn with_drafts(mut self, drafts: Vec<ScheduleDraft>) -> Self {
        self.drafts = drafts;
        self
    }

    pub fn with_constraints(mut self, constraints: Vec<SchedulingConstraint>) -> Self {
        self.constraints = constraints;
        self
    }
}

// ==========================================
// SchedulingRunResult - 运行结果
// ==========================================
#[derive(Debug, Clone)]
pub struct SchedulingRunResult {
    pub forecast: DemandForecast,
    pub draft: ScheduleDraft,
    pub coverage_score: f64,
    pub fulfillment_rate: f64,
    pub elapsed_ms: u64,
}

// ==========================================
// SchedulingOrchestrator - 引擎编排器
// ==========================================
pub struct SchedulingOrchestrator {
    forecaster: Arc<dyn DemandForecastingService>,
    optimizer: Arc<dyn ScheduleOptimizationService>,
    sink: Arc<dyn MetricsSink>,
}

impl SchedulingOrchestrator {
    /// 创建编排器
    ///
    /// # 参数
    /// - forecaster: 需求预测服务
    /// - optimizer: 排班优化服务
    /// - sink: 指标发布者（不需要观测时传 NoOpMetricsSink）
    pub fn new(
        forecaster: Arc<dyn DemandForecastingService>,
        optimizer: Arc<dyn ScheduleOptimizationService>,
        sink: Arc<dyn MetricsSink>,
    ) -> Self {
        Self {
            forecaster,
            optimizer,
            sink,
        }
    }

    /// 按配置构建（校验后创建预测与贪心排班服务）
    pub fn from_config(
        config: &SchedulingConfig,
        sink: Arc<dyn MetricsSink>,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        let forecaster = build_forecaster(&config.forecast)?;
        let optimizer = Arc::new(GreedyScheduleOptimizer::new(config.optimizer.clone()));
        Ok(Self::new(forecaster, optimizer, sink))
    }

    /// 执行一次完整排班
    #[instrument(skip(self, request), fields(
        signals = request.signals.len(),
        staff = request.staff.len(),
        model = self.forecaster.model_name(),
        generator = self.optimizer.generator_name()
    ))]
    pub async fn run(
        &self,
        request: SchedulingRunRequest,
    ) -> Result<SchedulingRunResult, EngineError> {
        let perf = PerfGuard::new("scheduling_run");

        // 1. 需求预测
        let forecast = self
            .forecaster
            .generate_forecast(&request.signals, &request.forecast_options)
            .await?;

        // 2. 组装上下文
        let mut builder = SchedulingContext::builder()
            .staff(request.staff)
            .demand_forecast(forecast.clone())
            .drafts(request.drafts)
            .constraints(request.constraints);
        if let Some(hints) = request.staff_usage_hints {
            builder = builder.staff_usage_hints(hints);
        }
        let context = builder.build();

        // 3. 排班
        let draft = self.optimizer.generate_schedule(&context).await?;

        // 4. 指标
        let score = draft
            .coverage_score()
            .unwrap_or_else(|| coverage_score(&forecast.signals, &draft.assignments));
        let rate = fulfillment_rate(&forecast.signals, &draft.assignments);
        let metric_tags = tags(&[
            ("scheduleId", draft.id.as_str()),
            ("model", forecast.model.as_str()),
            ("generator", self.optimizer.generator_name()),
        ]);
        self.sink.publish(MetricEvent::new(
            names::SCHEDULE_ACCURACY,
            score,
            metric_tags.clone(),
        ));
        self.sink
            .publish(MetricEvent::new(names::FULFILLMENT_RATE, rate, metric_tags));

        let elapsed_ms = perf.elapsed_ms();
        info!(
            draft_id = %draft.id,
            assignments = draft.assignments.len(),
            coverage_score = score,
            fulfillment_rate = rate,
            elapsed_ms,
            "排班运行完成"
        );

        Ok(SchedulingRunResult {
            forecast,
            draft,
            coverage_score: score,
            fulfillment_rate: rate,
            elapsed_ms,
        })
    }
}
