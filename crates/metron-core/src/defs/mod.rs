//! 定义表：`(服务, 范围) -> 范围定义` 与 `(服务, 指标) -> 指标定义` 的不可变字面量。
//!
//! # 设计背景（Why）
//! - 分类表是纯数据，体量大且增长频繁；工程风险全部集中在“表与编号漂移”上。
//!   这里用 [`scope_block!`]/[`metric_block!`] 宏让每个区段的枚举与定义表出自
//!   同一次宏展开：顺序天然一致，每个标识符恰有一条定义，哨兵由表长计算。
//! - 数据不以包级可变 map 暴露；全部为 `static` 字面量，构造即终态，
//!   任意线程只读共享。
//!
//! # 契约说明（What）
//! - [`scope_definition`]/[`metric_definition`] 是仅有的查询入口，只接受复合键；
//!   查不到返回 `None`（跨服务使用私有编号），由解析器降级处理，本层不兜底。
//! - 指标线名在单服务组合区间内必须唯一；该约束由 [`crate::validate`] 在注册表
//!   构造时强制，不属于查询路径的运行期关注点。

use crate::ident::{MetricIdx, MetricKey, ScopeIdx, ScopeKey, ServiceIdx};
use crate::tags::Tag;
use alloc::vec::Vec;
use serde::Serialize;

pub mod metrics;
pub mod runtime;
pub mod scopes;

/// 支持的指标类型。直方图建模为携带桶布局的 Timer，不单设枚举值。
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Counter,
    Timer,
    Gauge,
}

/// 单个操作范围的属性：`operation` 标签值与可选的附加静态标签。
///
/// # 契约说明（What）
/// - `operation` 必填，是延迟/错误/请求量指标的主维度；
/// - `tags` 一经声明不可变；与动态标签的合并发生在解析器，精度高者胜。
#[derive(Clone, Copy, Debug)]
pub struct ScopeDef {
    operation: &'static str,
    tags: &'static [Tag<'static>],
}

impl ScopeDef {
    /// 声明仅携带操作名的范围。
    pub const fn op(operation: &'static str) -> Self {
        Self {
            operation,
            tags: &[],
        }
    }

    /// 声明携带附加静态标签的范围。
    pub const fn tagged(operation: &'static str, tags: &'static [Tag<'static>]) -> Self {
        Self { operation, tags }
    }

    /// 范围的 `operation` 标签值。
    pub const fn operation(&self) -> &'static str {
        self.operation
    }

    /// 附加静态标签；无则为空切片。
    pub const fn tags(&self) -> &'static [Tag<'static>] {
        self.tags
    }
}

/// 单个指标的属性：稳定线名、类型与可选直方图桶边界。
#[derive(Clone, Copy, Debug)]
pub struct MetricDef {
    name: &'static str,
    kind: MetricKind,
    buckets: Option<&'static [f64]>,
}

impl MetricDef {
    /// 声明单调计数器。
    pub const fn counter(name: &'static str) -> Self {
        Self {
            name,
            kind: MetricKind::Counter,
            buckets: None,
        }
    }

    /// 声明时长指标。
    pub const fn timer(name: &'static str) -> Self {
        Self {
            name,
            kind: MetricKind::Timer,
            buckets: None,
        }
    }

    /// 声明瞬时值仪表。
    pub const fn gauge(name: &'static str) -> Self {
        Self {
            name,
            kind: MetricKind::Gauge,
            buckets: None,
        }
    }

    /// 声明按直方图渲染的时长指标；`buckets` 为后端的桶上界序列。
    pub const fn histogram(name: &'static str, buckets: &'static [f64]) -> Self {
        Self {
            name,
            kind: MetricKind::Timer,
            buckets: Some(buckets),
        }
    }

    /// 后端线名；在单服务组合区间内唯一。
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// 指标类型。
    pub const fn kind(&self) -> MetricKind {
        self.kind
    }

    /// 直方图桶边界；仅当后端把 Timer 渲染为直方图时有意义。
    pub const fn buckets(&self) -> Option<&'static [f64]> {
        self.buckets
    }
}

/// 在一次宏展开内声明一个范围区段的枚举与定义表。
///
/// # 逻辑解析（How）
/// - 枚举判别值由编译器按声明顺序分配（`repr(u16)`），即“构造顺序稠密分配”；
/// - `ALL` 与表同序展开，哨兵 `count` 取 `ALL.len()`，不存在手工维护的数字。
macro_rules! scope_block {
    (
        $(#[$meta:meta])*
        $vis:vis enum $Enum:ident, table $TABLE:ident, count $COUNT:ident;
        $( $Variant:ident => $def:expr, )+
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u16)]
        $vis enum $Enum {
            $( $Variant, )+
        }

        impl $Enum {
            /// 区段内全部标识符，按分配顺序排列。
            $vis const ALL: &'static [$Enum] = &[ $( $Enum::$Variant, )+ ];
        }

        /// 与枚举同序的定义表；两者出自同一次宏展开，不可能漂移。
        $vis static $TABLE: &[$crate::defs::ScopeDef] = &[ $( $def, )+ ];

        /// 区段哨兵：恰为已分配条目数（最大编号 + 1）。
        $vis const $COUNT: u16 = $Enum::ALL.len() as u16;
    };
}

/// 与 [`scope_block!`] 对应的指标区段声明宏。
macro_rules! metric_block {
    (
        $(#[$meta:meta])*
        $vis:vis enum $Enum:ident, table $TABLE:ident, count $COUNT:ident;
        $( $Variant:ident => $def:expr, )+
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u16)]
        $vis enum $Enum {
            $( $Variant, )+
        }

        impl $Enum {
            /// 区段内全部标识符，按分配顺序排列。
            $vis const ALL: &'static [$Enum] = &[ $( $Enum::$Variant, )+ ];
        }

        /// 与枚举同序的定义表。
        $vis static $TABLE: &[$crate::defs::MetricDef] = &[ $( $def, )+ ];

        /// 区段哨兵。
        $vis const $COUNT: u16 = $Enum::ALL.len() as u16;
    };
}

pub(crate) use metric_block;
pub(crate) use scope_block;

/// `(服务, 范围) -> 范围定义` 查询。
///
/// # 契约说明（What）
/// - 公共区段对所有服务返回同一条定义（“公共范围被各服务原样共享”）；
/// - 私有区段仅在其所属服务下命中；跨服务使用返回 `None`，这是定义缺失
///   而非运行期错误，调用侧（解析器）负责降级。
pub fn scope_definition(key: ScopeKey) -> Option<&'static ScopeDef> {
    match (key.service, key.scope) {
        (_, ScopeIdx::Common(s)) => Some(&scopes::COMMON_SCOPE_DEFS[s as usize]),
        (ServiceIdx::Frontend, ScopeIdx::Frontend(s)) => {
            Some(&scopes::FRONTEND_SCOPE_DEFS[s as usize])
        }
        (ServiceIdx::History, ScopeIdx::History(s)) => {
            Some(&scopes::HISTORY_SCOPE_DEFS[s as usize])
        }
        (ServiceIdx::Matching, ScopeIdx::Matching(s)) => {
            Some(&scopes::MATCHING_SCOPE_DEFS[s as usize])
        }
        (ServiceIdx::Worker, ScopeIdx::Worker(s)) => Some(&scopes::WORKER_SCOPE_DEFS[s as usize]),
        _ => None,
    }
}

/// `(服务, 指标) -> 指标定义` 查询；命中规则与 [`scope_definition`] 相同。
pub fn metric_definition(key: MetricKey) -> Option<&'static MetricDef> {
    match (key.service, key.metric) {
        (_, MetricIdx::Common(m)) => Some(&metrics::COMMON_METRIC_DEFS[m as usize]),
        (ServiceIdx::History, MetricIdx::History(m)) => {
            Some(&metrics::HISTORY_METRIC_DEFS[m as usize])
        }
        (ServiceIdx::Matching, MetricIdx::Matching(m)) => {
            Some(&metrics::MATCHING_METRIC_DEFS[m as usize])
        }
        (ServiceIdx::Worker, MetricIdx::Worker(m)) => {
            Some(&metrics::WORKER_METRIC_DEFS[m as usize])
        }
        _ => None,
    }
}

/// 服务组合区间内的范围总数（公共 + 私有），供数组型消费方定表长。
pub const fn scope_count(service: ServiceIdx) -> u16 {
    scopes::NUM_COMMON_SCOPES
        + match service {
            ServiceIdx::Common => 0,
            ServiceIdx::Frontend => scopes::NUM_FRONTEND_SCOPES,
            ServiceIdx::History => scopes::NUM_HISTORY_SCOPES,
            ServiceIdx::Matching => scopes::NUM_MATCHING_SCOPES,
            ServiceIdx::Worker => scopes::NUM_WORKER_SCOPES,
        }
}

/// 服务组合区间内的指标总数（公共 + 私有）。
pub const fn metric_count(service: ServiceIdx) -> u16 {
    metrics::NUM_COMMON_METRICS
        + match service {
            ServiceIdx::Common | ServiceIdx::Frontend => 0,
            ServiceIdx::History => metrics::NUM_HISTORY_METRICS,
            ServiceIdx::Matching => metrics::NUM_MATCHING_METRICS,
            ServiceIdx::Worker => metrics::NUM_WORKER_METRICS,
        }
}

/// 枚举给定服务可见的全部范围标识（公共在前、私有在后），供校验与全表扫描使用。
pub fn scope_indices(service: ServiceIdx) -> Vec<ScopeIdx> {
    let mut out: Vec<ScopeIdx> = scopes::CommonScope::ALL
        .iter()
        .map(|s| ScopeIdx::Common(*s))
        .collect();
    match service {
        ServiceIdx::Common => {}
        ServiceIdx::Frontend => {
            out.extend(scopes::FrontendScope::ALL.iter().map(|s| ScopeIdx::Frontend(*s)));
        }
        ServiceIdx::History => {
            out.extend(scopes::HistoryScope::ALL.iter().map(|s| ScopeIdx::History(*s)));
        }
        ServiceIdx::Matching => {
            out.extend(scopes::MatchingScope::ALL.iter().map(|s| ScopeIdx::Matching(*s)));
        }
        ServiceIdx::Worker => {
            out.extend(scopes::WorkerScope::ALL.iter().map(|s| ScopeIdx::Worker(*s)));
        }
    }
    out
}

/// 枚举给定服务可见的全部指标标识。
pub fn metric_indices(service: ServiceIdx) -> Vec<MetricIdx> {
    let mut out: Vec<MetricIdx> = metrics::CommonMetric::ALL
        .iter()
        .map(|m| MetricIdx::Common(*m))
        .collect();
    match service {
        ServiceIdx::Common | ServiceIdx::Frontend => {}
        ServiceIdx::History => {
            out.extend(metrics::HistoryMetric::ALL.iter().map(|m| MetricIdx::History(*m)));
        }
        ServiceIdx::Matching => {
            out.extend(metrics::MatchingMetric::ALL.iter().map(|m| MetricIdx::Matching(*m)));
        }
        ServiceIdx::Worker => {
            out.extend(metrics::WorkerMetric::ALL.iter().map(|m| MetricIdx::Worker(*m)));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::scopes::CommonScope;

    #[test]
    fn common_range_is_shared_verbatim() {
        let key_a = ScopeKey::new(ServiceIdx::History, ScopeIdx::Common(CommonScope::PersistenceCreateShard));
        let key_b = ScopeKey::new(ServiceIdx::Matching, ScopeIdx::Common(CommonScope::PersistenceCreateShard));
        let a = scope_definition(key_a).expect("common scope under history");
        let b = scope_definition(key_b).expect("common scope under matching");
        assert!(core::ptr::eq(a, b), "公共区段必须是同一条定义的共享");
    }

    #[test]
    fn foreign_private_index_is_a_definition_miss() {
        use crate::defs::metrics::HistoryMetric;
        let key = MetricKey::new(ServiceIdx::Matching, MetricIdx::History(HistoryMetric::TaskRequests));
        assert!(metric_definition(key).is_none());
    }

    #[test]
    fn sentinel_equals_combined_len() {
        for service in ServiceIdx::ALL {
            assert_eq!(scope_indices(*service).len(), scope_count(*service) as usize);
            assert_eq!(metric_indices(*service).len(), metric_count(*service) as usize);
        }
    }
}
