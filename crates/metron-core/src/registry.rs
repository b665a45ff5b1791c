//! 注册表解析器：发射客户端获取“完整指标身份”的唯一入口。
//!
//! # 设计背景（Why）
//! - 发射客户端在热路径上需要把 `(服务, 范围)` 换成操作名 + 合并标签，把
//!   `(服务, 指标)` 换成线名 + 类型 + 可选桶布局。该换算必须是纯函数：遥测
//!   代码不允许携带可变共享状态，也不允许让宿主进程崩溃。
//! - 表不以包级可变 map 暴露给调用侧，而是收敛为一次性构造
//!   的 [`Registry`] 值，以共享所有权分发给所有消费者，单例变异接口不存在。
//!
//! # 逻辑解析（How）
//! - 解析 = 查表（[`crate::defs`]）+ 标签合并 + 兜底。标签按固定优先级分层合并，
//!   低到高依次为：范围静态标签 → 进程身份标签（构造时注入）→ 调用点动态标签；
//!   键冲突时高层覆盖低层，让通用的 `service_role` 缺省值可以按调用覆盖而不
//!   触碰共享定义。
//! - 定义缺失（跨服务使用私有编号）降级为哨兵描述符并通知诊断接收器，绝不
//!   返回错误或 panic。
//!
//! # 并发契约（What）
//! - 表构造一次、终生只读；[`Registry`] 的全部方法可被任意线程并发调用，无锁。
//! - 解析是引用透明的：相同输入必然产出逐位相同的描述符。

use crate::defs::{self, MetricKind};
use crate::ident::{MetricKey, ScopeKey};
use crate::sealed::Sealed;
use crate::tags::{Tag, TagSet, tag};
use crate::validate;
use alloc::borrow::Cow;
use alloc::collections::BTreeMap;
use alloc::format;
use alloc::sync::Arc;
use alloc::vec::Vec;

/// 定义缺失时替代的操作名。
pub const UNKNOWN_OPERATION: &str = "unknown";

/// SLA 口径的错误分类，供发射客户端在记账时区分用户错误与内部错误。
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorClass {
    /// 无错误。
    NoError,
    /// 用户侧错误，不计入 SLA。
    UserError,
    /// 内部错误，计入 SLA。
    InternalError,
}

/// 解析期定义缺失事件。
///
/// 缺失是定义缺陷的运行期征兆；解析已按兜底规则降级，此事件仅供宿主计数或
/// 告警，不要求处理。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefinitionMiss {
    /// `(服务, 范围)` 无定义。
    Scope(ScopeKey),
    /// `(服务, 指标)` 无定义。
    Metric(MetricKey),
}

/// 诊断接收器契约：宿主把定义缺失接入自身遥测的扩展点。
///
/// # 契约说明（What）
/// - **前置条件**：实现必须线程安全（`Send + Sync`）且不得阻塞——回调发生在
///   指标发射热路径上；
/// - **后置条件**：回调不改变解析结果；接收器缺席时缺失被静默降级。
pub trait DiagnosticSink: Send + Sync + Sealed {
    /// 观察一次定义缺失。
    fn on_definition_miss(&self, miss: DefinitionMiss);
}

/// 完整解析后的范围描述符：操作名 + 合并标签集。
///
/// 标签集按键排序、无重复键；`operation` 单独暴露，不混入辅助标签。
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedScope<'a> {
    operation: &'static str,
    tags: Vec<Tag<'a>>,
    fallback: bool,
}

impl<'a> ResolvedScope<'a> {
    /// 范围的 `operation` 标签值；定义缺失时为 [`UNKNOWN_OPERATION`]。
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// 合并后的辅助标签，键序稳定。
    pub fn tags(&self) -> &[Tag<'a>] {
        &self.tags
    }

    /// 本描述符是否来自定义缺失的兜底路径。
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }
}

/// 完整解析后的指标描述符：线名 + 类型 + 可选桶布局。
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedMetric {
    name: Cow<'static, str>,
    kind: MetricKind,
    buckets: Option<&'static [f64]>,
    fallback: bool,
}

impl ResolvedMetric {
    /// 后端线名；定义缺失时为合成名 `unknown_metric_<service>_<raw>`。
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 指标类型；定义缺失时兜底为 Counter。
    pub fn kind(&self) -> MetricKind {
        self.kind
    }

    /// 直方图桶边界；仅 Timer 且后端按直方图渲染时有意义。
    pub fn buckets(&self) -> Option<&'static [f64]> {
        self.buckets
    }

    /// 本描述符是否来自定义缺失的兜底路径。
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }
}

/// 不可变的指标分类注册表。
///
/// # 使用方式（How）
/// - 进程启动时经 [`RegistryBuilder`] 构造一次（构造即运行全量校验），以
///   `Arc<Registry>` 分发给全部发射点；
/// - 此后只读：没有任何方法接受 `&mut self`。
pub struct Registry {
    process_tags: Vec<Tag<'static>>,
    sink: Option<Arc<dyn DiagnosticSink>>,
}

impl Registry {
    /// 以缺省配置（无进程身份标签、无诊断接收器）构造注册表。
    ///
    /// # 契约说明（What）
    /// - **后置条件**：返回前已对定义表运行完整校验；任何线名重复、编号碰撞
    ///   或断档都会以 [`crate::TaxonomyError`] 拒绝构造。
    pub fn new() -> Result<Self, crate::TaxonomyError> {
        RegistryBuilder::default().build()
    }

    /// 解析 `(服务, 范围)` 与调用点动态标签为最终的操作名与标签集。
    ///
    /// # 逻辑解析（How）
    /// 1. 查范围定义；缺失则操作名取 [`UNKNOWN_OPERATION`]、静态层为空，并通知
    ///    诊断接收器；
    /// 2. 按 静态标签 → 进程身份标签 → 动态标签 的次序写入有序映射，后写覆盖
    ///    先写，实现“精度高者胜”；
    /// 3. 产出键序稳定的标签向量。
    ///
    /// # 契约说明（What）
    /// - 纯函数，永不失败；任意线程可并发调用。
    pub fn resolve_scope<'a>(&'a self, key: ScopeKey, dynamic: TagSet<'a>) -> ResolvedScope<'a> {
        let def = defs::scope_definition(key);
        if def.is_none() {
            self.report(DefinitionMiss::Scope(key));
        }

        let mut merged: BTreeMap<&'a str, &'a str> = BTreeMap::new();
        if let Some(def) = def {
            for tag in def.tags() {
                merged.insert(tag.name(), tag.value());
            }
        }
        for tag in &self.process_tags {
            merged.insert(tag.name(), tag.value());
        }
        for tag in dynamic {
            merged.insert(tag.name(), tag.value());
        }

        ResolvedScope {
            operation: def.map_or(UNKNOWN_OPERATION, |def| def.operation()),
            tags: merged
                .into_iter()
                .map(|(name, value)| Tag::new(name, value))
                .collect(),
            fallback: def.is_none(),
        }
    }

    /// 解析 `(服务, 指标)` 为最终的线名、类型与桶布局。
    ///
    /// # 契约说明（What）
    /// - 定义缺失时兜底为 Counter，线名合成自服务名与组合编号，保证发射仍然
    ///   良构；缺失会通知诊断接收器并在描述符上置 `is_fallback`；
    /// - 引用透明：相同输入两次调用返回逐位相同的描述符。
    pub fn resolve_metric(&self, key: MetricKey) -> ResolvedMetric {
        match defs::metric_definition(key) {
            Some(def) => ResolvedMetric {
                name: Cow::Borrowed(def.name()),
                kind: def.kind(),
                buckets: def.buckets(),
                fallback: false,
            },
            None => {
                self.report(DefinitionMiss::Metric(key));
                ResolvedMetric {
                    name: Cow::Owned(format!(
                        "unknown_metric_{}_{}",
                        key.service.as_str(),
                        key.metric.raw()
                    )),
                    kind: MetricKind::Counter,
                    buckets: None,
                    fallback: true,
                }
            }
        }
    }

    /// 构造时注入的进程身份标签（主机名、服务角色等）。
    pub fn process_tags(&self) -> &[Tag<'static>] {
        &self.process_tags
    }

    fn report(&self, miss: DefinitionMiss) {
        if let Some(sink) = &self.sink {
            sink.on_definition_miss(miss);
        }
    }
}

/// [`Registry`] 的构造器：注入进程身份标签与诊断接收器。
///
/// # 设计背景（Why）
/// - 主机名、服务角色等标签属于“每进程一次”的事实，放在构造期注入可以让
///   解析热路径免于重复传参；调用点仍可用动态标签覆盖。
#[derive(Default)]
pub struct RegistryBuilder {
    process_tags: Vec<Tag<'static>>,
    sink: Option<Arc<dyn DiagnosticSink>>,
}

impl RegistryBuilder {
    /// 创建空构造器。
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个进程身份标签；同名标签后写覆盖先写。
    pub fn process_tag(
        mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.process_tags.push(Tag::new(name, value));
        self
    }

    /// 以主机名注入 [`tag::HOSTNAME`] 标签的便捷方法。
    pub fn hostname(self, hostname: impl Into<Cow<'static, str>>) -> Self {
        self.process_tag(tag::HOSTNAME, hostname)
    }

    /// 安装诊断接收器。
    pub fn diagnostic_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// 校验定义表并冻结为不可变注册表。
    pub fn build(self) -> Result<Registry, crate::TaxonomyError> {
        validate::run()?;
        Ok(Registry {
            process_tags: self.process_tags,
            sink: self.sink,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::scopes::CommonScope;
    use crate::ident::{ScopeIdx, ServiceIdx};

    #[test]
    fn process_tags_sit_between_static_and_dynamic() {
        let registry = RegistryBuilder::new()
            .hostname("node-3")
            .build()
            .expect("shipped tables must validate");
        let key = ScopeKey::new(
            ServiceIdx::Common,
            ScopeIdx::Common(CommonScope::HistoryClientStartWorkflowExecution),
        );

        // 进程层覆盖静态层。
        let registry_override = RegistryBuilder::new()
            .process_tag(tag::SERVICE_ROLE, tag::role::FRONTEND)
            .build()
            .expect("shipped tables must validate");
        let resolved = registry_override.resolve_scope(key, &[]);
        let role = resolved
            .tags()
            .iter()
            .find(|t| t.name() == tag::SERVICE_ROLE)
            .expect("service_role 必须存在");
        assert_eq!(role.value(), "frontend");

        // 动态层覆盖进程层。
        let dynamic = [Tag::new(tag::SERVICE_ROLE, tag::role::MATCHING)];
        let resolved = registry.resolve_scope(key, &dynamic);
        let role = resolved
            .tags()
            .iter()
            .find(|t| t.name() == tag::SERVICE_ROLE)
            .expect("service_role 必须存在");
        assert_eq!(role.value(), "matching");
        // 主机名标签保留。
        assert!(resolved.tags().iter().any(|t| t.name() == tag::HOSTNAME));
    }
}
