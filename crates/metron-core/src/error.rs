//! 构建期校验失败的错误域。
//!
//! # 设计背景（Why）
//! - 分类表的两类违例——线名重复与编号碰撞/断档——属于定义缺陷，必须在注册表
//!   构造时（进程启动）报告并拒绝，而不是在发射路径上被静默吞掉或演化成后端
//!   口径事故。
//! - 解析路径（[`crate::registry`]）永不返回本错误：定义缺失在那里按兜底规则
//!   降级，遥测代码不允许让宿主进程崩溃。
//!
//! # 契约说明（What）
//! - 每个变体携带足以定位违例条目的机读上下文（服务、索引空间、编号或线名）；
//! - 错误码语义稳定，新增变体属于次级版本演进，改写既有变体属于破坏性变更。

use crate::ident::ServiceIdx;
use core::fmt;
use thiserror::Error;

/// 违例所在的索引空间。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexSpace {
    Scope,
    Metric,
}

impl fmt::Display for IndexSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IndexSpace::Scope => "scope",
            IndexSpace::Metric => "metric",
        })
    }
}

/// 分类表校验失败。
///
/// # 风险提示（Trade-offs）
/// - 校验一次性全量扫描定义表，构造开销与表长线性相关；注册表是进程级单次
///   构造，该成本可以接受。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxonomyError {
    /// 同一服务的组合指标区间内出现重复线名，会在后端把无关指标混叠。
    #[error("service `{service}` declares duplicate metric wire name `{name}`")]
    DuplicateWireName {
        service: ServiceIdx,
        name: &'static str,
    },

    /// 组合区间编号出现碰撞：同一整数被分配了两次。
    #[error("service `{service}` {space} index space assigns raw index {raw} twice")]
    IndexCollision {
        service: ServiceIdx,
        space: IndexSpace,
        raw: u16,
    },

    /// 组合区间编号断档：稠密分配被破坏，数组型消费方会越界或留洞。
    #[error(
        "service `{service}` {space} index space is not dense: expected raw index {expected}, found {found}"
    )]
    IndexGap {
        service: ServiceIdx,
        space: IndexSpace,
        expected: u16,
        found: u16,
    },

    /// 范围缺少 `operation` 标签值或指标缺少线名。
    #[error("service `{service}` {space} entry at raw index {raw} has an empty name")]
    EmptyName {
        service: ServiceIdx,
        space: IndexSpace,
        raw: u16,
    },
}
