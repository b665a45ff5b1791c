use criterion::{Criterion, criterion_group, criterion_main};
use metron_core::defs::metrics::CommonMetric;
use metron_core::defs::scopes::CommonScope;
use metron_core::{MetricKey, Registry, RegistryBuilder, ScopeKey, ServiceIdx, Tag, tag};

/// Benchmark: 无动态标签的范围解析。
///
/// *Why*：范围解析位于每次样本发射的热路径上，量化查表 + 合并的基线开销。
/// *How*：对带静态角色标签的公共范围反复解析，进程层注入一个主机名标签。
/// *What*：关注单次解析耗时，作为发射客户端预算的输入。
fn bench_resolve_scope(c: &mut Criterion) {
    let registry = RegistryBuilder::new()
        .hostname("bench-host")
        .build()
        .expect("出厂表必须通过校验");
    let key = ScopeKey::new(
        ServiceIdx::History,
        CommonScope::HistoryClientStartWorkflowExecution.into(),
    );
    c.bench_function("resolve_scope_static_tags", |b| {
        b.iter(|| criterion::black_box(registry.resolve_scope(key, &[])));
    });

    let dynamic = [Tag::new(tag::SERVICE_ROLE, tag::role::MATCHING)];
    c.bench_function("resolve_scope_dynamic_override", |b| {
        b.iter(|| criterion::black_box(registry.resolve_scope(key, &dynamic)));
    });
}

/// Benchmark: 指标解析的命中路径与兜底路径。
///
/// *Why*：兜底路径含一次线名格式化分配，需确认其开销仍在可接受区间。
fn bench_resolve_metric(c: &mut Criterion) {
    let registry = Registry::new().expect("出厂表必须通过校验");
    let hit = MetricKey::new(ServiceIdx::Frontend, CommonMetric::ServiceLatency.into());
    c.bench_function("resolve_metric_hit", |b| {
        b.iter(|| criterion::black_box(registry.resolve_metric(hit)));
    });

    let miss = MetricKey::new(
        ServiceIdx::Matching,
        metron_core::MetricIdx::History(metron_core::defs::metrics::HistoryMetric::TaskRequests),
    );
    c.bench_function("resolve_metric_fallback", |b| {
        b.iter(|| criterion::black_box(registry.resolve_metric(miss)));
    });
}

criterion_group!(resolve_benches, bench_resolve_scope, bench_resolve_metric);
criterion_main!(resolve_benches);
