//! 分类表结构不变量的整表验收。
//!
//! # 教案式综述
//! - **意图 (Why)**：定义表是混合语言机群的后端口径契约，任何一次新增或重排
//!   都可能引入线名重复、编号断档或公共区间分叉。本套件在不依赖解析器的前提
//!   下，独立复算这些不变量，与 [`metron_core::validate`] 互为对照。
//! - **执行方式 (How)**：直接枚举各区段的 `ALL` 常量与定义表，逐服务重建
//!   “组合区间”视图后断言：编号稠密、线名唯一、公共区间逐字节共享。
//! - **契约约束 (What)**：所有断言只依赖公开 API；失败信息须足以定位到具体
//!   服务与条目。

use std::collections::BTreeSet;

use metron_core::defs::metrics::{
    CommonMetric, HistoryMetric, MatchingMetric, NUM_COMMON_METRICS, NUM_HISTORY_METRICS,
    NUM_MATCHING_METRICS, NUM_WORKER_METRICS, WorkerMetric,
};
use metron_core::defs::scopes::{
    COMMON_SCOPE_DEFS, CommonScope, FRONTEND_SCOPE_DEFS, FrontendScope, HISTORY_SCOPE_DEFS,
    HistoryScope, MATCHING_SCOPE_DEFS, MatchingScope, NUM_COMMON_SCOPES, NUM_FRONTEND_SCOPES,
    NUM_HISTORY_SCOPES, NUM_MATCHING_SCOPES, NUM_WORKER_SCOPES, WORKER_SCOPE_DEFS, WorkerScope,
};
use metron_core::{MetricKey, MetricKind, ScopeKey, ServiceIdx, defs, validate};

/// 出厂表必须整体通过构建期校验。
#[test]
fn shipped_tables_validate() {
    assert_eq!(validate::run(), Ok(()));
}

/// 哨兵常量由区段长度导出，不允许与表长脱节。
#[test]
fn sentinels_track_table_lengths() {
    assert_eq!(NUM_COMMON_SCOPES as usize, COMMON_SCOPE_DEFS.len());
    assert_eq!(NUM_FRONTEND_SCOPES as usize, FRONTEND_SCOPE_DEFS.len());
    assert_eq!(NUM_HISTORY_SCOPES as usize, HISTORY_SCOPE_DEFS.len());
    assert_eq!(NUM_MATCHING_SCOPES as usize, MATCHING_SCOPE_DEFS.len());
    assert_eq!(NUM_WORKER_SCOPES as usize, WORKER_SCOPE_DEFS.len());
    assert_eq!(NUM_COMMON_SCOPES as usize, CommonScope::ALL.len());
    assert_eq!(NUM_FRONTEND_SCOPES as usize, FrontendScope::ALL.len());
    assert_eq!(NUM_HISTORY_SCOPES as usize, HistoryScope::ALL.len());
    assert_eq!(NUM_MATCHING_SCOPES as usize, MatchingScope::ALL.len());
    assert_eq!(NUM_WORKER_SCOPES as usize, WorkerScope::ALL.len());
    assert_eq!(NUM_COMMON_METRICS as usize, CommonMetric::ALL.len());
    assert_eq!(NUM_HISTORY_METRICS as usize, HistoryMetric::ALL.len());
    assert_eq!(NUM_MATCHING_METRICS as usize, MatchingMetric::ALL.len());
    assert_eq!(NUM_WORKER_METRICS as usize, WorkerMetric::ALL.len());
}

/// 每个服务的组合区间编号必须恰为 `0..count`，与校验器独立复算。
#[test]
fn combined_ranges_are_dense() {
    for service in ServiceIdx::ALL {
        let mut scope_raws: Vec<u16> = defs::scope_indices(*service)
            .into_iter()
            .map(|scope| scope.raw())
            .collect();
        scope_raws.sort_unstable();
        let expected: Vec<u16> = (0..defs::scope_count(*service)).collect();
        assert_eq!(scope_raws, expected, "scope range of {service}");

        let mut metric_raws: Vec<u16> = defs::metric_indices(*service)
            .into_iter()
            .map(|metric| metric.raw())
            .collect();
        metric_raws.sort_unstable();
        let expected: Vec<u16> = (0..defs::metric_count(*service)).collect();
        assert_eq!(metric_raws, expected, "metric range of {service}");
    }
}

/// 同一服务可见的全部指标线名必须两两不同（跨公共/私有区段）。
#[test]
fn wire_names_are_unique_per_service() {
    for service in ServiceIdx::ALL {
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        for metric in defs::metric_indices(*service) {
            let def = defs::metric_definition(MetricKey::new(*service, metric))
                .unwrap_or_else(|| panic!("{service} 可见的指标必有定义"));
            assert!(
                seen.insert(def.name()),
                "service {service} declares `{}` twice",
                def.name()
            );
        }
    }
}

/// 公共区间对所有服务共享同一份定义，不允许按服务分叉。
#[test]
fn common_range_is_shared_across_services() {
    for scope in CommonScope::ALL {
        let reference = defs::scope_definition(ScopeKey::new(ServiceIdx::Common, (*scope).into()))
            .expect("公共范围在 Common 下必有定义");
        for service in ServiceIdx::ALL {
            let def = defs::scope_definition(ScopeKey::new(*service, (*scope).into()))
                .expect("公共范围对所有服务可见");
            assert!(std::ptr::eq(reference, def));
        }
    }
}

/// 首尾条目的抽样对账：枚举序与表序一旦错位，这里最先失败。
#[test]
fn spot_check_table_alignment() {
    let def = defs::scope_definition(ScopeKey::new(
        ServiceIdx::Common,
        CommonScope::PersistenceCreateShard.into(),
    ))
    .expect("首条公共范围必有定义");
    assert_eq!(def.operation(), "CreateShard");
    assert!(def.tags().is_empty());

    let def = defs::scope_definition(ScopeKey::new(
        ServiceIdx::Matching,
        MatchingScope::MatchingListTaskListPartitions.into(),
    ))
    .expect("末条 Matching 范围必有定义");
    assert_eq!(def.operation(), "ListTaskListPartitions");

    let def = defs::metric_definition(MetricKey::new(
        ServiceIdx::Common,
        CommonMetric::ServiceLatency.into(),
    ))
    .expect("公共指标必有定义");
    assert_eq!(def.name(), "service_latency");
    assert_eq!(def.kind(), MetricKind::Timer);

    let def = defs::metric_definition(MetricKey::new(
        ServiceIdx::Worker,
        WorkerMetric::DomainReplicationEnqueueDLQCount.into(),
    ))
    .expect("末条 Worker 指标必有定义");
    assert_eq!(def.name(), "domain_replication_dlq_enqueue_requests");
    assert_eq!(def.kind(), MetricKind::Counter);
}

/// 进程级基础指标沿用既有后端线名，且自身无重名。
#[test]
fn runtime_metric_names_are_stable() {
    use metron_core::defs::runtime;

    assert_eq!(runtime::SERVICE_BASE_METRICS, [("restarts", MetricKind::Counter)]);
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    for (name, _) in runtime::RUNTIME_METRICS {
        assert!(seen.insert(name), "runtime metric `{name}` declared twice");
    }
    assert!(seen.contains("memory_gc_pause_ms"));
    assert!(seen.contains("num_goroutines"));
}

/// 服务名与指标类型的序列化形态对外稳定（蛇形小写），供配置与诊断输出复用。
#[test]
fn serialized_identifiers_use_snake_case() {
    assert_eq!(
        serde_json::to_value(ServiceIdx::History).expect("serialize"),
        serde_json::json!("history")
    );
    assert_eq!(
        serde_json::to_value(MetricKind::Timer).expect("serialize"),
        serde_json::json!("timer")
    );
}

/// 私有编号只对属主服务可见；对其他服务是定义缺失。
#[test]
fn private_ranges_stay_private() {
    let history_only = ScopeKey::new(
        ServiceIdx::Matching,
        HistoryScope::HistoryStartWorkflowExecution.into(),
    );
    assert!(defs::scope_definition(history_only).is_none());

    let matching_only = MetricKey::new(
        ServiceIdx::History,
        MatchingMetric::PollSuccessCounter.into(),
    );
    assert!(defs::metric_definition(matching_only).is_none());
}
