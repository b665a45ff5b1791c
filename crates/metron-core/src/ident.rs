//! 标识符空间：服务、操作范围与指标的无碰撞引用方式。
//!
//! # 设计背景（Why）
//! - 范围与指标的编号按服务分区：公共区段 `[0, NUM_COMMON_*)` 被所有服务原样共享，
//!   私有区段 `[NUM_COMMON_*, NUM_COMMON_* + 私有条目数)` 的含义仅在其所属服务内成立。
//!   不同服务可以复用同一个私有整数表示无关操作——这是刻意的设计，能保持编号稠密。
//! - 该复用只有在“裸整数不可用”的前提下才安全。靠调用约定（查表时带上服务下标）
//!   维持该前提过于脆弱；这里将其提升为类型约束：[`ScopeIdx`]/[`MetricIdx`] 是按区段划分的
//!   和类型，[`ScopeKey`]/[`MetricKey`] 是唯一的查询货币，跨服务误用在类型层即不可表达
//!   或在解析层退化为显式兜底。
//!
//! # 逻辑解析（How）
//! - 每个区段是一个判别值由编译器顺序分配的枚举（见 [`crate::defs::scopes`] 与
//!   [`crate::defs::metrics`]），区段哨兵由表长计算，杜绝手工点数引入的差一错误。
//! - [`ScopeIdx::raw`] 把区段内判别值换算为组合区间里的整数：公共区段原值，私有区段
//!   加上公共哨兵。该换算由校验过程（[`crate::validate`]）整体验证稠密且无碰撞。
//!
//! # 契约说明（What）
//! - 所有标识符在编译期闭合；运行期既不创建也不销毁。
//! - `raw()` 返回的整数仅用于数组下标、诊断展示与校验，不得脱离其 Key 单独传递。

use crate::defs::metrics::{CommonMetric, HistoryMetric, MatchingMetric, WorkerMetric};
use crate::defs::scopes::{CommonScope, FrontendScope, HistoryScope, MatchingScope, WorkerScope};
use core::fmt;
use serde::Serialize;

/// 发射指标的进程角色。
///
/// # 契约说明（What）
/// - `Common` 表示“任何服务都会产生的公共埋点”这一逻辑归属，并非独立进程；
/// - 枚举在编译期闭合，新增服务属于破坏性变更，需同步扩展定义表与校验。
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceIdx {
    Common,
    Frontend,
    History,
    Matching,
    Worker,
}

impl ServiceIdx {
    /// 全部服务，按编号顺序排列；数组型消费方可据此确定行数。
    pub const ALL: &'static [ServiceIdx] = &[
        ServiceIdx::Common,
        ServiceIdx::Frontend,
        ServiceIdx::History,
        ServiceIdx::Matching,
        ServiceIdx::Worker,
    ];

    /// 服务的小写稳定名，用于诊断输出与兜底指标名合成。
    pub const fn as_str(self) -> &'static str {
        match self {
            ServiceIdx::Common => "common",
            ServiceIdx::Frontend => "frontend",
            ServiceIdx::History => "history",
            ServiceIdx::Matching => "matching",
            ServiceIdx::Worker => "worker",
        }
    }
}

impl fmt::Display for ServiceIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 服务总数哨兵，由 [`ServiceIdx::ALL`] 计算。
pub const NUM_SERVICES: usize = ServiceIdx::ALL.len();

/// 操作范围标识：公共区段对所有服务可见，私有区段只在其所属服务内有意义。
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScopeIdx {
    Common(CommonScope),
    Frontend(FrontendScope),
    History(HistoryScope),
    Matching(MatchingScope),
    Worker(WorkerScope),
}

impl ScopeIdx {
    /// 组合区间内的整数编号：公共区段取判别值，私有区段加上公共哨兵。
    pub const fn raw(self) -> u16 {
        use crate::defs::scopes::NUM_COMMON_SCOPES;
        match self {
            ScopeIdx::Common(s) => s as u16,
            ScopeIdx::Frontend(s) => NUM_COMMON_SCOPES + s as u16,
            ScopeIdx::History(s) => NUM_COMMON_SCOPES + s as u16,
            ScopeIdx::Matching(s) => NUM_COMMON_SCOPES + s as u16,
            ScopeIdx::Worker(s) => NUM_COMMON_SCOPES + s as u16,
        }
    }

    /// 拥有该编号的服务；公共区段归属 [`ServiceIdx::Common`]。
    pub const fn owner(self) -> ServiceIdx {
        match self {
            ScopeIdx::Common(_) => ServiceIdx::Common,
            ScopeIdx::Frontend(_) => ServiceIdx::Frontend,
            ScopeIdx::History(_) => ServiceIdx::History,
            ScopeIdx::Matching(_) => ServiceIdx::Matching,
            ScopeIdx::Worker(_) => ServiceIdx::Worker,
        }
    }

    /// 该编号在给定服务的组合区间内是否有定义。
    ///
    /// # 契约说明（What）
    /// - 公共区段对所有服务可见；私有区段仅对其所属服务可见；
    /// - 返回 `false` 时，解析层按兜底规则降级而非失败（见 [`crate::registry`]）。
    pub const fn visible_to(self, service: ServiceIdx) -> bool {
        matches!(self, ScopeIdx::Common(_)) || self.owner() as u8 == service as u8
    }
}

impl From<CommonScope> for ScopeIdx {
    fn from(s: CommonScope) -> Self {
        ScopeIdx::Common(s)
    }
}
impl From<FrontendScope> for ScopeIdx {
    fn from(s: FrontendScope) -> Self {
        ScopeIdx::Frontend(s)
    }
}
impl From<HistoryScope> for ScopeIdx {
    fn from(s: HistoryScope) -> Self {
        ScopeIdx::History(s)
    }
}
impl From<MatchingScope> for ScopeIdx {
    fn from(s: MatchingScope) -> Self {
        ScopeIdx::Matching(s)
    }
}
impl From<WorkerScope> for ScopeIdx {
    fn from(s: WorkerScope) -> Self {
        ScopeIdx::Worker(s)
    }
}

/// 指标标识，分区方式与 [`ScopeIdx`] 相同。
///
/// Frontend 服务没有私有指标区段，这是上游定义表的事实而非遗漏。
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetricIdx {
    Common(CommonMetric),
    History(HistoryMetric),
    Matching(MatchingMetric),
    Worker(WorkerMetric),
}

impl MetricIdx {
    /// 组合区间内的整数编号。
    pub const fn raw(self) -> u16 {
        use crate::defs::metrics::NUM_COMMON_METRICS;
        match self {
            MetricIdx::Common(m) => m as u16,
            MetricIdx::History(m) => NUM_COMMON_METRICS + m as u16,
            MetricIdx::Matching(m) => NUM_COMMON_METRICS + m as u16,
            MetricIdx::Worker(m) => NUM_COMMON_METRICS + m as u16,
        }
    }

    /// 拥有该编号的服务。
    pub const fn owner(self) -> ServiceIdx {
        match self {
            MetricIdx::Common(_) => ServiceIdx::Common,
            MetricIdx::History(_) => ServiceIdx::History,
            MetricIdx::Matching(_) => ServiceIdx::Matching,
            MetricIdx::Worker(_) => ServiceIdx::Worker,
        }
    }

    /// 该编号在给定服务的组合区间内是否有定义。
    pub const fn visible_to(self, service: ServiceIdx) -> bool {
        matches!(self, MetricIdx::Common(_)) || self.owner() as u8 == service as u8
    }
}

impl From<CommonMetric> for MetricIdx {
    fn from(m: CommonMetric) -> Self {
        MetricIdx::Common(m)
    }
}
impl From<HistoryMetric> for MetricIdx {
    fn from(m: HistoryMetric) -> Self {
        MetricIdx::History(m)
    }
}
impl From<MatchingMetric> for MetricIdx {
    fn from(m: MatchingMetric) -> Self {
        MetricIdx::Matching(m)
    }
}
impl From<WorkerMetric> for MetricIdx {
    fn from(m: WorkerMetric) -> Self {
        MetricIdx::Worker(m)
    }
}

/// 范围查询的唯一货币：服务与范围标识的复合键。
///
/// # 设计背景（Why）
/// - 私有编号的跨服务复用要求查询永远成对出现；复合键让“裸整数查表”无法表达。
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScopeKey {
    pub service: ServiceIdx,
    pub scope: ScopeIdx,
}

impl ScopeKey {
    /// 构造复合键。不做可见性检查：跨服务误用属于解析期兜底路径。
    pub const fn new(service: ServiceIdx, scope: ScopeIdx) -> Self {
        Self { service, scope }
    }
}

/// 指标查询的唯一货币。
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MetricKey {
    pub service: ServiceIdx,
    pub metric: MetricIdx,
}

impl MetricKey {
    /// 构造复合键。
    pub const fn new(service: ServiceIdx, metric: MetricIdx) -> Self {
        Self { service, metric }
    }
}
