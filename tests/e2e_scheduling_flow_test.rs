// ==========================================
// 端到端排班流程测试
// ==========================================
// 测试目标: 原始信号 → 预测 → 上下文 → 排班 → 指标
// ==========================================

mod helpers;

use async_trait::async_trait;
use helpers::test_data_builder::{day, signal, StaffBuilder};
use std::sync::{Arc, Mutex};
use workforce_scheduler::config::SchedulingConfig;
use workforce_scheduler::domain::context::SchedulingConstraint;
use workforce_scheduler::domain::forecast::{DemandForecast, DemandSignal};
use workforce_scheduler::engine::forecast::{
    BaselineDemandForecastingService, CompositeDemandForecastingService, DemandForecastingService,
    ForecastOptions,
};
use workforce_scheduler::engine::optimizer::GreedyScheduleOptimizer;
use workforce_scheduler::engine::orchestrator::{SchedulingOrchestrator, SchedulingRunRequest};
use workforce_scheduler::engine::EngineError;
use workforce_scheduler::logging;
use workforce_scheduler::metrics::{MetricEvent, MetricsRegistry, NoOpMetricsSink};

const MORNING: &str = "08:00-12:00";

fn recording_registry() -> (Arc<MetricsRegistry>, Arc<Mutex<Vec<MetricEvent>>>) {
    let registry = Arc::new(MetricsRegistry::new());
    let events = Arc::new(Mutex::new(Vec::new()));
    {
        let events = events.clone();
        registry.register(move |event: &MetricEvent| events.lock().unwrap().push(event.clone()));
    }
    (registry, events)
}

fn week_request() -> SchedulingRunRequest {
    let signals = vec![
        signal(day(3), MORNING, 6.0, "store-1"),
        signal(day(1), MORNING, 2.0, "store-1"),
        signal(day(2), MORNING, 4.0, "store-1"),
    ];
    let staff = (1..=4)
        .map(|i| {
            let mut builder = StaffBuilder::new(&format!("S{}", i));
            for d in 1..=3 {
                builder = builder.available(day(d), MORNING);
            }
            builder.build()
        })
        .collect();
    SchedulingRunRequest::new(signals, staff).with_constraints(vec![SchedulingConstraint {
        id: "C1".to_string(),
        kind: "min-rest-hours".to_string(),
        payload: serde_json::json!({ "hours": 11 }),
    }])
}

#[tokio::test]
async fn test_full_run_emits_metrics() {
    logging::init_test();
    println!("\n=== 测试：完整排班流程 ===");

    let (registry, events) = recording_registry();
    let orchestrator =
        SchedulingOrchestrator::from_config(&SchedulingConfig::default(), registry.clone())
            .unwrap();

    let result = orchestrator.run(week_request()).await.unwrap();

    // window=3: [2, 3, 4]
    let smoothed: Vec<f64> = result.forecast.signals.iter().map(|s| s.expected_demand).collect();
    assert_eq!(smoothed, vec![2.0, 3.0, 4.0]);
    assert_eq!(result.draft.assignments.len(), 9);
    assert_eq!(result.coverage_score, 100.0);
    assert_eq!(result.fulfillment_rate, 100.0);

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].name, "schedule.accuracy");
    assert_eq!(events[0].value, result.coverage_score);
    assert_eq!(events[0].tag("scheduleId"), Some(result.draft.id.as_str()));
    assert_eq!(events[0].tag("generator"), Some("greedy-coverage"));
    assert_eq!(events[1].name, "schedule.fulfillment_rate");
}

#[tokio::test]
async fn test_rerun_with_seed_draft_adds_nothing() {
    let orchestrator = SchedulingOrchestrator::from_config(
        &SchedulingConfig::default(),
        Arc::new(NoOpMetricsSink),
    )
    .unwrap();

    let first = orchestrator.run(week_request()).await.unwrap();
    let second = orchestrator
        .run(week_request().with_drafts(vec![first.draft.clone()]))
        .await
        .unwrap();

    assert_eq!(second.draft.id, first.draft.id);
    assert_eq!(second.draft.assignments.len(), first.draft.assignments.len());
}

#[tokio::test]
async fn test_composite_config_run() {
    let config = SchedulingConfig::from_json_str(
        r#"{
            "forecast": { "strategy": "composite-ensemble", "ensembleWindowSizes": [1, 3] },
            "optimizer": { "maxShiftsPerDay": 2 }
        }"#,
    )
    .unwrap();
    let orchestrator =
        SchedulingOrchestrator::from_config(&config, Arc::new(NoOpMetricsSink)).unwrap();

    let result = orchestrator.run(week_request()).await.unwrap();

    assert_eq!(result.forecast.model, "composite-ensemble");
    // 组合策略保持原始顺序
    assert_eq!(result.forecast.signals[0].date, day(3));
    // 4 名员工 × 上限 2 = 8 个班次
    assert!(result.draft.assignments.len() <= 8);
    assert!((0.0..=100.0).contains(&result.coverage_score));
}

struct BrokenForecaster;

#[async_trait]
impl DemandForecastingService for BrokenForecaster {
    fn model_name(&self) -> &str {
        "broken"
    }

    async fn generate_forecast(
        &self,
        _signals: &[DemandSignal],
        _options: &ForecastOptions,
    ) -> Result<DemandForecast, EngineError> {
        Err(anyhow::anyhow!("upstream timeout").into())
    }
}

#[tokio::test]
async fn test_forecast_failure_aborts_without_metrics() {
    let (registry, events) = recording_registry();
    let composite = CompositeDemandForecastingService::new(vec![
        Arc::new(BaselineDemandForecastingService::default()) as Arc<dyn DemandForecastingService>,
        Arc::new(BrokenForecaster),
    ])
    .unwrap();
    let orchestrator = SchedulingOrchestrator::new(
        Arc::new(composite),
        Arc::new(GreedyScheduleOptimizer::default()),
        registry,
    );

    let result = orchestrator.run(week_request()).await;

    match result {
        Err(EngineError::Other(e)) => assert!(e.to_string().contains("upstream timeout")),
        other => panic!("unexpected result: {:?}", other.map(|r| r.draft.id)),
    }
    assert!(events.lock().unwrap().is_empty());
}
