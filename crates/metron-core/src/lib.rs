#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![doc = "metron-core: 多服务分布式系统的静态指标分类注册表。"]
#![doc = ""]
#![doc = "== 定位（Why） =="]
#![doc = "系统中每个埋点都必须解析为稳定、带类型、带标签的身份：(服务, 操作范围, 指标) 三元组映射到规范指标名、指标类型（Counter/Gauge/Timer）、可选直方图桶布局与维度标签集合。"]
#![doc = "本 crate 是该映射的单一事实来源：定义表在编译期闭合，进程启动时构造一次 [`Registry`]，之后任意线程只读并发解析，无锁、无 I/O、无运行时注册。"]
#![doc = ""]
#![doc = "== 边界（What） =="]
#![doc = "样本的网络传输、聚合与分位数计算、重试与背压、运行期动态注册均不在本 crate 职责内；发射客户端仅依赖 [`Registry::resolve_scope`] 与 [`Registry::resolve_metric`] 返回的描述符。"]
#![doc = ""]
#![doc = "== 内存分配依赖 =="]
#![doc = "核心解析依赖 [`alloc`] 中的 `Vec`、`Arc`、`BTreeMap`；`std` Feature 仅为宿主集成便利，注册表本体可运行于 `no_std + alloc` 环境。"]

extern crate alloc;

pub mod defs;
pub mod error;
pub mod ident;
pub mod registry;
mod sealed;
pub mod tags;
/// 测试桩命名空间：框架官方维护的 `Noop`/`Recording` 诊断接收器，供集成测试与宿主示例复用。
///
/// # 设计背景（Why）
/// - 统一维护常见桩对象，避免各测试重复定义零尺寸结构体；
/// - 当诊断契约演进时，单点更新即可保证所有测试同步适配。
pub mod test_stubs;
pub mod validate;

pub use defs::{MetricDef, MetricKind, ScopeDef};
pub use error::{IndexSpace, TaxonomyError};
pub use ident::{MetricIdx, MetricKey, NUM_SERVICES, ScopeIdx, ScopeKey, ServiceIdx};
pub use registry::{
    DefinitionMiss, DiagnosticSink, ErrorClass, Registry, RegistryBuilder, ResolvedMetric,
    ResolvedScope, UNKNOWN_OPERATION,
};
pub use tags::{Tag, TagSet, tag};
