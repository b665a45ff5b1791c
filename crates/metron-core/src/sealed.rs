//! 内部 sealed 模块用于控制外部扩展边界。
//!
//! # 设计背景（Why）
//! - 注册表对外暴露可实现的诊断契约（如 [`crate::registry::DiagnosticSink`]），需要在
//!   SemVer 框架下保留为 Trait 增加默认方法的演进空间。
//!
//! # 逻辑解析（How）
//! - 定义私有 Trait `Sealed` 并对所有类型提供 blanket 实现；公开 Trait 通过
//!   `: crate::sealed::Sealed` 间接依赖该标记。
//! - 若未来需要收紧实现者集合，在此处调整 blanket 条件即可，公开签名不变。
//!
//! # 契约说明（What）
//! - 调用方无需显式实现 `Sealed`；任意类型默认满足该约束。
pub(crate) trait Sealed {}

impl<T: ?Sized> Sealed for T {}
