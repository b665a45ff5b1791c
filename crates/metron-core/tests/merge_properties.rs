//! 标签合并的性质验证。
//!
//! # 教案式综述
//! - **意图 (Why)**：合并规则是三层（静态 → 进程 → 动态）逐层覆盖，输出必须
//!   键序稳定且无重复键。枚举式用例难以覆盖任意键集组合，这里以 Proptest
//!   随机构造进程层与动态层，验证规则对全输入空间成立。
//! - **性质 (What)**：
//!   1. 输出按键严格升序（蕴含无重复键）；
//!   2. 动态层的每个键都以动态层的值出现在输出中；
//!   3. 未被覆盖的进程层键原值保留；
//!   4. 输出键集合恰为三层键集合之并。

use proptest::collection::vec;
use proptest::prelude::*;

use metron_core::defs::scopes::CommonScope;
use metron_core::{RegistryBuilder, ScopeKey, ServiceIdx, Tag};

fn tag_name() -> impl Strategy<Value = String> {
    "[a-z][a-z_]{0,8}"
}

fn tag_value() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,8}"
}

fn tag_layer() -> impl Strategy<Value = Vec<(String, String)>> {
    vec((tag_name(), tag_value()), 0..6)
}

proptest! {
    #[test]
    fn merged_tags_are_sorted_and_deduplicated(
        process in tag_layer(),
        dynamic in tag_layer(),
    ) {
        let mut builder = RegistryBuilder::new();
        for (name, value) in &process {
            builder = builder.process_tag(name.clone(), value.clone());
        }
        let registry = builder.build().expect("出厂表必须通过校验");

        let dynamic_tags: Vec<Tag<'_>> = dynamic
            .iter()
            .map(|(name, value)| Tag::new(name.as_str(), value.as_str()))
            .collect();
        let key = ScopeKey::new(
            ServiceIdx::History,
            CommonScope::HistoryClientStartWorkflowExecution.into(),
        );
        let resolved = registry.resolve_scope(key, &dynamic_tags);

        // 性质 1：键严格升序。
        let names: Vec<&str> = resolved.tags().iter().map(Tag::name).collect();
        for window in names.windows(2) {
            prop_assert!(window[0] < window[1], "键序错乱: {names:?}");
        }

        // 性质 2：动态层胜出。每个动态键取该键最后一次出现的值。
        for (name, _) in &dynamic {
            let expected = dynamic
                .iter()
                .rev()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str())
                .expect("键来自 dynamic 本身");
            let actual = resolved
                .tags()
                .iter()
                .find(|t| t.name() == name.as_str())
                .map(Tag::value);
            prop_assert_eq!(actual, Some(expected));
        }

        // 性质 3：未被动态层覆盖的进程层键保留进程层的值。
        for (name, _) in &process {
            if dynamic.iter().any(|(n, _)| n == name) {
                continue;
            }
            let expected = process
                .iter()
                .rev()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str())
                .expect("键来自 process 本身");
            let actual = resolved
                .tags()
                .iter()
                .find(|t| t.name() == name.as_str())
                .map(Tag::value);
            prop_assert_eq!(actual, Some(expected));
        }

        // 性质 4：输出键集合 = 静态键 ∪ 进程键 ∪ 动态键。
        let def_tags = ["service_role"];
        for name in &names {
            let known = def_tags.contains(name)
                || process.iter().any(|(n, _)| n == name)
                || dynamic.iter().any(|(n, _)| n == name);
            prop_assert!(known, "输出出现三层之外的键 `{}`", name);
        }
        for name in def_tags {
            prop_assert!(names.contains(&name), "静态键 `{name}` 丢失");
        }
    }
}
