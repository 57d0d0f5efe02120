// ==========================================
// 排班决策支持核心 - 指标注册表
// ==========================================
// 职责: 记录命名数值观测并同步分发给已注册监听器
// 说明: 显式实例，由组合根创建并注入（无进程级全局状态）
// 说明: 监听器只增不减；注册顺序即调用顺序
// ==========================================
// 注: 监听器 panic 不做隔离，会传播给调用方；监听器应保证不 panic
// ==========================================

use super::event::{names, MetricEvent, MetricTags};
use std::sync::{Arc, PoisonError, RwLock};

/// 指标监听器
pub type MetricListener = Arc<dyn Fn(&MetricEvent) + Send + Sync>;

// ==========================================
// MetricsSink Trait
// ==========================================

/// 指标发布者 Trait
///
/// 编排器只依赖此 trait，可接入注册表或空实现
pub trait MetricsSink: Send + Sync {
    /// 发布指标事件
    fn publish(&self, event: MetricEvent);
}

/// 空操作指标发布者
///
/// 用于不需要观测的场景（如单元测试）
#[derive(Debug, Clone, Default)]
pub struct NoOpMetricsSink;

impl MetricsSink for NoOpMetricsSink {
    fn publish(&self, event: MetricEvent) {
        tracing::debug!(name = %event.name, value = event.value, "NoOpMetricsSink: 跳过指标");
    }
}

// ==========================================
// MetricsRegistry - 指标注册表
// ==========================================
#[derive(Default)]
pub struct MetricsRegistry {
    listeners: RwLock<Vec<MetricListener>>,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册监听器（追加，不去重）
    pub fn register<F>(&self, listener: F)
    where
        F: Fn(&MetricEvent) + Send + Sync + 'static,
    {
        // 列表只追加，poison 后数据仍一致
        let mut listeners = self
            .listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        listeners.push(Arc::new(listener));
    }

    /// register 的别名
    pub fn register_metric_listener<F>(&self, listener: F)
    where
        F: Fn(&MetricEvent) + Send + Sync + 'static,
    {
        self.register(listener);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// 同步分发事件
    ///
    /// 先在读锁内复制监听器快照，释放锁后按注册顺序调用；
    /// 监听器内部可再注册监听器（本次分发不包含新注册者）。
    pub fn emit(&self, event: &MetricEvent) {
        let snapshot: Vec<MetricListener> = self
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        tracing::trace!(
            name = %event.name,
            value = event.value,
            listeners = snapshot.len(),
            "分发指标"
        );

        for listener in snapshot.iter() {
            listener(event);
        }
    }

    /// 观测排班准确度
    pub fn observe_schedule_accuracy(&self, value: f64, tags: Option<MetricTags>) {
        self.emit(&MetricEvent::new(
            names::SCHEDULE_ACCURACY,
            value,
            tags.unwrap_or_default(),
        ));
    }

    /// 观测时段满足率
    pub fn observe_fulfillment_rate(&self, value: f64, tags: Option<MetricTags>) {
        self.emit(&MetricEvent::new(
            names::FULFILLMENT_RATE,
            value,
            tags.unwrap_or_default(),
        ));
    }
}

impl MetricsSink for MetricsRegistry {
    fn publish(&self, event: MetricEvent) {
        self.emit(&event);
    }
}

impl std::fmt::Debug for MetricsRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricsRegistry")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
