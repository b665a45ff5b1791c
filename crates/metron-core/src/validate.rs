//! 分类表的构建期校验。
//!
//! # 设计背景（Why）
//! - 定义表靠宏展开保证“枚举与表同序”，但仍有两类跨区段约束无法由单次展开
//!   表达：组合区间（公共 + 私有）的编号稠密性依赖 [`crate::ident`] 的换算
//!   算术，线名唯一性依赖跨区段去重。本模块在注册表构造时整体验证这两者。
//!
//! # 逻辑解析（How）
//! 1. 对每个服务枚举其可见标识符全集，按 `raw()` 排序后要求恰为 `0..count`；
//! 2. 对每个服务收集组合区间内全部线名，重复即拒绝；
//! 3. 顺带拒绝空操作名与空线名（两者会让样本在后端不可归因）。
//!
//! # 契约说明（What）
//! - 校验是纯函数，成功返回 `Ok(())`，首个违例即返回对应 [`TaxonomyError`]；
//! - 所有输入均为编译期字面量，同一二进制的校验结果恒定。

use crate::defs;
use crate::error::{IndexSpace, TaxonomyError};
use crate::ident::{MetricKey, ScopeKey, ServiceIdx};
use alloc::collections::BTreeSet;
use alloc::vec::Vec;

/// 对全部服务运行完整校验。
pub fn run() -> Result<(), TaxonomyError> {
    for service in ServiceIdx::ALL {
        dense_scope_range(*service)?;
        dense_metric_range(*service)?;
        unique_wire_names(*service)?;
        named_operations(*service)?;
    }
    Ok(())
}

/// 服务的组合范围区间必须恰为 `0..scope_count(service)`。
fn dense_scope_range(service: ServiceIdx) -> Result<(), TaxonomyError> {
    let mut raws: Vec<u16> = defs::scope_indices(service)
        .into_iter()
        .map(|scope| scope.raw())
        .collect();
    raws.sort_unstable();
    check_dense(service, IndexSpace::Scope, &raws, defs::scope_count(service))
}

/// 服务的组合指标区间必须恰为 `0..metric_count(service)`。
fn dense_metric_range(service: ServiceIdx) -> Result<(), TaxonomyError> {
    let mut raws: Vec<u16> = defs::metric_indices(service)
        .into_iter()
        .map(|metric| metric.raw())
        .collect();
    raws.sort_unstable();
    check_dense(service, IndexSpace::Metric, &raws, defs::metric_count(service))
}

fn check_dense(
    service: ServiceIdx,
    space: IndexSpace,
    sorted_raws: &[u16],
    count: u16,
) -> Result<(), TaxonomyError> {
    let mut expected: u16 = 0;
    for raw in sorted_raws {
        if *raw == expected {
            expected += 1;
        } else if expected > 0 && *raw == expected - 1 {
            return Err(TaxonomyError::IndexCollision {
                service,
                space,
                raw: *raw,
            });
        } else {
            return Err(TaxonomyError::IndexGap {
                service,
                space,
                expected,
                found: *raw,
            });
        }
    }
    if expected != count {
        return Err(TaxonomyError::IndexGap {
            service,
            space,
            expected,
            found: count,
        });
    }
    Ok(())
}

/// 组合指标区间内的线名不得重复，也不得为空。
fn unique_wire_names(service: ServiceIdx) -> Result<(), TaxonomyError> {
    let mut seen: BTreeSet<&'static str> = BTreeSet::new();
    for metric in defs::metric_indices(service) {
        let def = defs::metric_definition(MetricKey::new(service, metric))
            .expect("metric_indices 只枚举本服务可见的标识符");
        if def.name().is_empty() {
            return Err(TaxonomyError::EmptyName {
                service,
                space: IndexSpace::Metric,
                raw: metric.raw(),
            });
        }
        if !seen.insert(def.name()) {
            return Err(TaxonomyError::DuplicateWireName {
                service,
                name: def.name(),
            });
        }
    }
    Ok(())
}

/// 每个范围必须有非空 `operation` 标签值。
fn named_operations(service: ServiceIdx) -> Result<(), TaxonomyError> {
    for scope in defs::scope_indices(service) {
        let def = defs::scope_definition(ScopeKey::new(service, scope))
            .expect("scope_indices 只枚举本服务可见的标识符");
        if def.operation().is_empty() {
            return Err(TaxonomyError::EmptyName {
                service,
                space: IndexSpace::Scope,
                raw: scope.raw(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_tables_pass_validation() {
        assert_eq!(run(), Ok(()));
    }

    #[test]
    fn dense_check_reports_gap() {
        let err = check_dense(ServiceIdx::History, IndexSpace::Scope, &[0, 1, 3], 4);
        assert_eq!(
            err,
            Err(TaxonomyError::IndexGap {
                service: ServiceIdx::History,
                space: IndexSpace::Scope,
                expected: 2,
                found: 3,
            })
        );
    }

    #[test]
    fn dense_check_reports_collision() {
        let err = check_dense(ServiceIdx::Worker, IndexSpace::Metric, &[0, 1, 1, 2], 3);
        assert_eq!(
            err,
            Err(TaxonomyError::IndexCollision {
                service: ServiceIdx::Worker,
                space: IndexSpace::Metric,
                raw: 1,
            })
        );
    }

    #[test]
    fn dense_check_reports_truncated_range() {
        let err = check_dense(ServiceIdx::Matching, IndexSpace::Scope, &[0, 1], 3);
        assert_eq!(
            err,
            Err(TaxonomyError::IndexGap {
                service: ServiceIdx::Matching,
                space: IndexSpace::Scope,
                expected: 2,
                found: 3,
            })
        );
    }
}
