//! 分类构建器：按分类代码与属性分类聚合规则项
use rustc_hash::FxHashMap;

use crate::classifier::RuleClassifier;
use crate::core::{dedup_items, CategoryCode, CategoryMap, RuleItem, SourceDomain, SourceEntry};

/// 分类构建器，分类映射的唯一生产者
#[derive(Debug, Clone, Default)]
pub struct CategoryBuilder {
    classifier: RuleClassifier,
}

impl CategoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 由全部源条目构建分类映射
    pub fn build(&self, entries: &[SourceEntry]) -> CategoryMap {
        let mut map = CategoryMap::new();
        for entry in entries {
            self.build_entry(entry, &mut map);
        }
        log::debug!(
            "[BUILD] 分类构建完成 | 源条目: {} | 分类数: {} | 规则项: {}",
            entries.len(),
            map.len(),
            map.item_count()
        );
        map
    }

    /// 单个条目：写入基础分类以及每个属性对应的 `<code>@<attr>` 分类
    fn build_entry(&self, entry: &SourceEntry, map: &mut CategoryMap) {
        let mut items = Vec::with_capacity(entry.domains.len() * 2);
        // 属性名 → 携带该属性的源域名（保持源顺序）
        let mut attributes: FxHashMap<&str, Vec<&SourceDomain>> = FxHashMap::default();

        for domain in &entry.domains {
            for attribute in &domain.attributes {
                attributes.entry(attribute.as_str()).or_default().push(domain);
            }
            items.extend(self.classifier.classify(domain));
        }

        if map.insert(entry.code.as_str(), dedup_items(items)).is_some() {
            log::warn!("[BUILD] 分类代码重复，后者覆盖前者: {}", entry.code);
        }

        for (attribute, domains) in attributes {
            let mut attribute_items: Vec<RuleItem> = Vec::with_capacity(domains.len() * 2);
            self.classifier
                .classify_into(domains.iter().copied(), &mut attribute_items);
            map.insert(
                CategoryCode::qualified(&entry.code, attribute),
                dedup_items(attribute_items),
            );
        }
    }
}
