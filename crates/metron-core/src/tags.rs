//! 维度标签模型与标签名/值词汇表。
//!
//! # 设计背景（Why）
//! - 指标样本靠 key/value 维度切片（如 `service_role=history`）；标签名与取值必须低基数、
//!   全局一致，否则后端聚合会互相错位。本模块集中维护这份词汇表，禁止散落的字符串字面量。
//! - 标签值同时存在“编译期常量”（范围定义表）与“运行期拼接”（主机名等进程身份）两种来源，
//!   因此采用 [`Cow<'a, str>`] 兼顾两者，避免热路径上的多余分配。
//!
//! # 契约说明（What）
//! - 标签名遵循蛇形命名且须为 ASCII 可打印字符；本类型不做校验，上层在定义表校验中兜底。
//! - 定义表中的静态标签一经声明不可变；合并动态标签是解析器的职责，不属于本模块。

use alloc::borrow::Cow;
use serde::Serialize;

/// 附着在指标样本上的单个维度标签。
///
/// # 逻辑解析（How）
/// - `name`/`value` 均为 [`Cow`]：定义表用 `Borrowed` 零拷贝，进程身份与动态标签可用 `Owned`。
/// - `from_static` 是 `const fn`，使定义表可以在静态存储中直接内联标签切片。
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Tag<'a> {
    name: Cow<'a, str>,
    value: Cow<'a, str>,
}

impl<'a> Tag<'a> {
    /// 构造标签，接受静态或运行期字符串。
    pub fn new(name: impl Into<Cow<'a, str>>, value: impl Into<Cow<'a, str>>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// 从静态字符串构造，可在 `const`/`static` 上下文使用。
    pub const fn from_static(name: &'static str, value: &'static str) -> Tag<'static> {
        Tag {
            name: Cow::Borrowed(name),
            value: Cow::Borrowed(value),
        }
    }

    /// 标签名的只读视图。
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 标签值的只读视图。
    pub fn value(&self) -> &str {
        &self.value
    }

    /// 提升为 `'static` 生命周期，便于长期持有（可能触发一次堆分配）。
    pub fn into_owned(self) -> Tag<'static> {
        Tag {
            name: Cow::Owned(self.name.into_owned()),
            value: Cow::Owned(self.value.into_owned()),
        }
    }
}

/// 标签集合的借用视图；调用方管理生命周期，实现方不得缓存超出调用栈范围。
pub type TagSet<'a> = &'a [Tag<'a>];

/// 标签名与标签值的稳定词汇表。
///
/// 新增取值时必须同步检查后端聚合口径；删除或改名属于破坏性变更。
pub mod tag {
    /// 进程主机名（进程身份层标签）。
    pub const HOSTNAME: &str = "hostname";
    /// 操作名维度；由解析器从范围定义中取出，单独返回而不混入辅助标签。
    pub const OPERATION: &str = "operation";
    /// 目标服务角色。
    pub const SERVICE_ROLE: &str = "service_role";
    /// 统计口径（大小/条数）。
    pub const STATS_TYPE: &str = "stats_type";
    /// 缓存类别。
    pub const CACHE_TYPE: &str = "cache_type";

    /// 未知归属的兜底标签值。
    pub const UNKNOWN_VALUE: &str = "Unknown";

    /// `service_role` 的合法取值。
    pub mod role {
        pub const HISTORY: &str = "history";
        pub const MATCHING: &str = "matching";
        pub const FRONTEND: &str = "frontend";
        pub const ADMIN: &str = "admin";
        pub const DC_REDIRECTION: &str = "dc_redirection";
        pub const BLOBSTORE: &str = "blobstore";
    }

    /// `stats_type` 的合法取值。
    pub mod stats_type {
        pub const SIZE: &str = "size";
        pub const COUNT: &str = "count";
    }

    /// `cache_type` 的合法取值。
    pub mod cache_type {
        pub const MUTABLE_STATE: &str = "mutablestate";
        pub const EVENTS: &str = "events";
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_tag_round_trip() {
        const ROLE: Tag<'static> = Tag::from_static(tag::SERVICE_ROLE, tag::role::HISTORY);
        assert_eq!(ROLE.name(), "service_role");
        assert_eq!(ROLE.value(), "history");
    }

    #[test]
    fn owned_tag_outlives_source() {
        let host = alloc::string::String::from("node-17");
        let tag = Tag::new(tag::HOSTNAME, host.as_str()).into_owned();
        drop(host);
        assert_eq!(tag.value(), "node-17");
    }
}
