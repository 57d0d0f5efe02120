use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;
use std::time::Instant;

static PERF_ENABLED: AtomicBool = AtomicBool::new(true);
static PERF_ENV_LOADED: Once = Once::new();

fn is_false(v: &str) -> bool {
    matches!(
        v.trim().to_lowercase().as_str(),
        "0" | "false" | "no" | "n" | "off"
    )
}

/// 性能日志开关
///
/// - 默认开启
/// - `WORKFORCE_SCHEDULER_PERF=0` 关闭（首次调用时读取一次）
pub fn perf_enabled() -> bool {
    PERF_ENV_LOADED.call_once(|| {
        if let Ok(v) = std::env::var("WORKFORCE_SCHEDULER_PERF") {
            PERF_ENABLED.store(!is_false(&v), Ordering::Relaxed);
        }
    });
    PERF_ENABLED.load(Ordering::Relaxed)
}

/// 显式设置开关（覆盖环境变量）
pub fn set_perf_enabled(enabled: bool) {
    PERF_ENV_LOADED.call_once(|| {});
    PERF_ENABLED.store(enabled, Ordering::Relaxed);
}

/// 性能统计 Guard：drop 时记录 elapsed_ms
///
/// 使用方式：
/// ```ignore
/// let _perf = workforce_scheduler::perf::PerfGuard::new("generate_schedule");
/// // do work...
/// ```
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        Self {
            op,
            start: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        if !perf_enabled() {
            return;
        }
        let elapsed_ms = self.elapsed_ms();
        tracing::info!(target: "perf", op = self.op, elapsed_ms, "done");
    }
}
