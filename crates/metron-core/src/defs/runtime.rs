//! 进程级基础指标的线名清单。
//!
//! 这些采样由宿主的发射客户端直接登记（无操作范围维度），注册表仅固化其线名与
//! 类型，保证混合语言机群在后端的口径一致。线名延续既有后端命名，不随实现语言
//! 调整。

use crate::defs::MetricKind;

pub const RESTARTS: &str = "restarts";
pub const NUM_GOROUTINES: &str = "num_goroutines";
pub const GOMAXPROCS: &str = "gomaxprocs";
pub const MEMORY_ALLOCATED: &str = "memory_allocated";
pub const MEMORY_HEAP: &str = "memory_heap";
pub const MEMORY_HEAPIDLE: &str = "memory_heapidle";
pub const MEMORY_HEAPINUSE: &str = "memory_heapinuse";
pub const MEMORY_STACK: &str = "memory_stack";
pub const NUM_GC: &str = "memory_num_gc";
pub const GC_PAUSE_MS: &str = "memory_gc_pause_ms";

/// 服务基线指标：进程重启计数。
pub static SERVICE_BASE_METRICS: &[(&str, MetricKind)] = &[(RESTARTS, MetricKind::Counter)];

/// 运行时资源指标：调度与内存水位。
pub static RUNTIME_METRICS: &[(&str, MetricKind)] = &[
    (NUM_GOROUTINES, MetricKind::Gauge),
    (GOMAXPROCS, MetricKind::Gauge),
    (MEMORY_ALLOCATED, MetricKind::Gauge),
    (MEMORY_HEAP, MetricKind::Gauge),
    (MEMORY_HEAPIDLE, MetricKind::Gauge),
    (MEMORY_HEAPINUSE, MetricKind::Gauge),
    (MEMORY_STACK, MetricKind::Gauge),
    (NUM_GC, MetricKind::Counter),
    (GC_PAUSE_MS, MetricKind::Timer),
];
