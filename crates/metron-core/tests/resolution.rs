//! 解析器行为验收：标签合并、兜底降级与诊断上报。
//!
//! # 教案式综述
//! - **意图 (Why)**：发射客户端只消费 [`Registry`] 的两个解析方法；本套件固化
//!   其可观测行为——操作名与标签分离、三层标签的覆盖次序、定义缺失永不失败
//!   且必经诊断接收器。
//! - **执行方式 (How)**：以出厂表构造注册表，逐一覆盖正常路径与兜底路径；
//!   缺失观测通过 [`RecordingSink`] 捕获后断言。

use std::sync::Arc;

use metron_core::defs::metrics::{CommonMetric, HistoryMetric};
use metron_core::defs::scopes::{CommonScope, HistoryScope};
use metron_core::test_stubs::{NoopSink, RecordingSink};
use metron_core::{
    DefinitionMiss, MetricKey, MetricKind, Registry, RegistryBuilder, ScopeKey, ServiceIdx, Tag,
    UNKNOWN_OPERATION, tag,
};

/// 无辅助标签的范围解析出空标签集，操作名单独返回。
#[test]
fn untagged_scope_yields_empty_tag_set() {
    let registry = Registry::new().expect("出厂表必须通过校验");
    let resolved = registry.resolve_scope(
        ScopeKey::new(ServiceIdx::Common, CommonScope::PersistenceCreateShard.into()),
        &[],
    );
    assert_eq!(resolved.operation(), "CreateShard");
    assert!(resolved.tags().is_empty());
    assert!(!resolved.is_fallback());
}

/// 带静态角色标签的范围解析出该标签。
#[test]
fn tagged_scope_carries_static_role() {
    let registry = Registry::new().expect("出厂表必须通过校验");
    let resolved = registry.resolve_scope(
        ScopeKey::new(
            ServiceIdx::Frontend,
            CommonScope::HistoryClientStartWorkflowExecution.into(),
        ),
        &[],
    );
    assert_eq!(resolved.operation(), "HistoryClientStartWorkflowExecution");
    assert_eq!(resolved.tags().len(), 1);
    assert_eq!(resolved.tags()[0].name(), tag::SERVICE_ROLE);
    assert_eq!(resolved.tags()[0].value(), tag::role::HISTORY);
}

/// 调用点动态标签覆盖范围静态标签，其余标签保留且键序稳定。
#[test]
fn dynamic_tags_override_static_tags() {
    let registry = RegistryBuilder::new()
        .hostname("emitter-7")
        .build()
        .expect("出厂表必须通过校验");
    let dynamic = [Tag::new(tag::SERVICE_ROLE, tag::role::MATCHING)];
    let resolved = registry.resolve_scope(
        ScopeKey::new(
            ServiceIdx::History,
            CommonScope::HistoryClientStartWorkflowExecution.into(),
        ),
        &dynamic,
    );
    let names: Vec<&str> = resolved.tags().iter().map(Tag::name).collect();
    assert_eq!(names, [tag::HOSTNAME, tag::SERVICE_ROLE]);
    assert_eq!(resolved.tags()[1].value(), tag::role::MATCHING);
}

/// 指标解析返回线名与类型；同一键两次解析结果逐位一致。
#[test]
fn metric_resolution_is_referentially_transparent() {
    let registry = Registry::new().expect("出厂表必须通过校验");
    let key = MetricKey::new(ServiceIdx::Frontend, CommonMetric::ServiceLatency.into());
    let first = registry.resolve_metric(key);
    assert_eq!(first.name(), "service_latency");
    assert_eq!(first.kind(), MetricKind::Timer);
    assert_eq!(first.buckets(), None);
    assert!(!first.is_fallback());
    assert_eq!(first, registry.resolve_metric(key));
}

/// 跨服务误用私有范围编号：解析降级为 `unknown`，缺失上报到接收器。
#[test]
fn foreign_private_scope_falls_back() {
    let sink = Arc::new(RecordingSink::new());
    let registry = RegistryBuilder::new()
        .diagnostic_sink(sink.clone())
        .build()
        .expect("出厂表必须通过校验");
    let key = ScopeKey::new(
        ServiceIdx::Worker,
        HistoryScope::HistoryStartWorkflowExecution.into(),
    );
    let resolved = registry.resolve_scope(key, &[]);
    assert_eq!(resolved.operation(), UNKNOWN_OPERATION);
    assert!(resolved.is_fallback());
    assert_eq!(sink.misses(), [DefinitionMiss::Scope(key)]);
}

/// 兜底路径仍叠加进程与动态标签，保证样本可归因到发射进程。
#[test]
fn fallback_scope_still_merges_ambient_tags() {
    let registry = RegistryBuilder::new()
        .hostname("emitter-7")
        .build()
        .expect("出厂表必须通过校验");
    let resolved = registry.resolve_scope(
        ScopeKey::new(
            ServiceIdx::Matching,
            HistoryScope::HistoryStartWorkflowExecution.into(),
        ),
        &[],
    );
    assert!(resolved.is_fallback());
    assert_eq!(resolved.tags().len(), 1);
    assert_eq!(resolved.tags()[0].name(), tag::HOSTNAME);
}

/// 跨服务误用私有指标编号：兜底为 Counter + 合成线名，且不会与任何真名冲突。
#[test]
fn foreign_private_metric_falls_back() {
    let sink = Arc::new(RecordingSink::new());
    let registry = RegistryBuilder::new()
        .diagnostic_sink(sink.clone())
        .build()
        .expect("出厂表必须通过校验");
    let key = MetricKey::new(ServiceIdx::Matching, HistoryMetric::TaskRequests.into());
    let resolved = registry.resolve_metric(key);
    assert!(resolved.is_fallback());
    assert_eq!(resolved.kind(), MetricKind::Counter);
    assert_eq!(resolved.buckets(), None);
    assert_eq!(
        resolved.name(),
        format!("unknown_metric_matching_{}", key.metric.raw())
    );
    assert_eq!(sink.misses(), [DefinitionMiss::Metric(key)]);
}

/// 接收器缺席或为 Noop 时，兜底路径依旧安静完成。
#[test]
fn miss_without_sink_is_silent() {
    let registry = RegistryBuilder::new()
        .diagnostic_sink(Arc::new(NoopSink))
        .build()
        .expect("出厂表必须通过校验");
    let resolved = registry.resolve_metric(MetricKey::new(
        ServiceIdx::Worker,
        HistoryMetric::TaskRequests.into(),
    ));
    assert!(resolved.is_fallback());
}
