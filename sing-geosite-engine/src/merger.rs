//! 区域分类合并：把 `category-*@cn` 并入 `geolocation-cn`
use rustc_hash::FxHashSet;

use crate::core::{CategoryCode, CategoryMap, RuleItem};
use crate::report::MergeReport;
use crate::utils::preview_codes;

/// 合并目标分类
pub const GEOLOCATION_CN: &str = "geolocation-cn";
/// 参与合并的属性
pub const CN_ATTRIBUTE: &str = "cn";
/// 参与合并的分类前缀
pub const CATEGORY_PREFIX: &str = "category-";

/// 分类合并器
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryMerger;

impl CategoryMerger {
    pub fn new() -> Self {
        Self
    }

    /// 收集所有参与合并的属性分类代码（已排序）
    pub fn collect_sources(&self, map: &CategoryMap) -> Vec<String> {
        map.iter()
            .map(|(code, _)| code)
            .filter(|code| CategoryCode::parse(code).is_regional_merge_source())
            .cloned()
            .collect()
    }

    /// 合并并覆盖 `geolocation-cn`
    ///
    /// 顺序：原 `geolocation-cn` 规则项在前，随后按代码顺序追加各来源分类，按结构去重
    pub fn merge(&self, map: &mut CategoryMap) -> MergeReport {
        let sources = self.collect_sources(map);
        log::debug!(
            "[MERGE] 合并来源 {} | {}",
            sources.len(),
            preview_codes(&sources, 8)
        );

        let mut seen: FxHashSet<RuleItem> = FxHashSet::default();
        let mut merged: Vec<RuleItem> = Vec::new();
        let target_items = map.get(GEOLOCATION_CN).into_iter().flatten();
        let source_items = sources
            .iter()
            .filter_map(|code| map.get(code))
            .flatten();
        for item in target_items.chain(source_items) {
            if seen.insert(item.clone()) {
                merged.push(item.clone());
            }
        }

        let item_count = merged.len();
        map.insert(GEOLOCATION_CN, merged);

        MergeReport {
            target: GEOLOCATION_CN.to_string(),
            merged: sources,
            item_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(value: &str) -> RuleItem {
        RuleItem::domain(value)
    }

    #[test]
    fn test_merge_cn_categories() {
        let mut map = CategoryMap::new();
        map.insert(GEOLOCATION_CN, vec![item("a")]);
        map.insert("category-ads@cn", vec![item("b")]);
        map.insert("category-ads-!cn@cn", vec![item("c")]);
        map.insert("category-games@cn", vec![item("a"), item("d")]);

        let report = CategoryMerger::new().merge(&mut map);

        let mut result = map.get(GEOLOCATION_CN).cloned().unwrap();
        result.sort();
        assert_eq!(result, vec![item("a"), item("b"), item("d")]);
        assert_eq!(report.merged, vec!["category-ads@cn", "category-games@cn"]);
        assert_eq!(report.item_count, 3);
        // 来源分类本身保留
        assert!(map.contains("category-ads@cn"));
    }

    #[test]
    fn test_plain_and_regional_codes_never_contribute() {
        let mut map = CategoryMap::new();
        map.insert(GEOLOCATION_CN, vec![item("a")]);
        map.insert("category-ads-cn", vec![item("x")]);
        map.insert("category-ads-cn@cn", vec![item("y")]);
        map.insert("category-ads@ads", vec![item("z")]);
        map.insert("tld-cn@cn", vec![item("w")]);

        let report = CategoryMerger::new().merge(&mut map);

        assert_eq!(map.get(GEOLOCATION_CN), Some(&vec![item("a")]));
        assert!(report.merged.is_empty());
    }

    #[test]
    fn test_merge_creates_missing_target() {
        let mut map = CategoryMap::new();
        map.insert("category-games@cn", vec![item("d"), item("d")]);

        CategoryMerger::new().merge(&mut map);

        assert_eq!(map.get(GEOLOCATION_CN), Some(&vec![item("d")]));
    }
}
